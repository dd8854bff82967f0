use dial::digit::{self, Digit, ReversalLatch};
use dial::{Knob, Movement, Position, ToneSink};

use super::Demo;

/// Shows a 0–8 digit that bounces back down past 8.
///
/// Every movement folds the raw reading, then writes the brightness and
/// colour for the folded digit. When the raw reading enters 9–15 the unit's
/// direction mode is flipped once, so the counter runs back toward the
/// lower half while the user keeps turning the same way.
#[derive(Debug, Default, Clone, Copy)]
pub struct DigitDemo {
    digit: Digit,
    latch: ReversalLatch,
    reversals: u32,
}

impl DigitDemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Digit for the last reading.
    pub fn digit(&self) -> Digit {
        self.digit
    }

    /// How many times the direction mode has been flipped.
    pub fn reversals(&self) -> u32 {
        self.reversals
    }

    fn show<K: Knob>(&mut self, position: Position, knob: &mut K) {
        self.digit = digit::fold(position);
        knob.set_brightness(digit::brightness(self.digit));
        knob.set_color(digit::color(self.digit));
    }
}

impl Demo for DigitDemo {
    fn name(&self) -> &'static str {
        "digit"
    }

    fn on_start<K: Knob, S: ToneSink>(&mut self, baseline: Position, knob: &mut K, _sink: &mut S) {
        self.latch = ReversalLatch::new(baseline);
        self.show(baseline, knob);
    }

    fn on_movement<K: Knob, S: ToneSink>(
        &mut self,
        movement: Movement,
        knob: &mut K,
        _sink: &mut S,
    ) {
        self.show(movement.current, knob);

        #[cfg(feature = "defmt")]
        defmt::debug!("digit: raw {} -> {}", movement.current, self.digit);

        if self.latch.observe(movement.current) {
            let mode = knob.direction_mode().reversed();
            knob.set_direction_mode(mode);
            self.reversals += 1;

            #[cfg(feature = "defmt")]
            defmt::info!("digit: entered upper range, direction mode now {}", mode);
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use dial::mock::{KnobCommand, MockKnob, MockToneSink};
    use dial::{Direction, PositionTracker};

    fn p(raw: u8) -> Position {
        Position::new(raw).unwrap()
    }

    fn step(demo: &mut DigitDemo, tracker: &mut PositionTracker, knob: &mut MockKnob, to: u8) {
        let mut sink = MockToneSink::new();
        if let Some(movement) = tracker.observe(p(to)) {
            demo.on_movement(movement, knob, &mut sink);
        }
    }

    #[test]
    fn start_shows_folded_baseline() {
        let mut demo = DigitDemo::new();
        let mut knob = MockKnob::new(p(12));
        demo.on_start(p(12), &mut knob, &mut MockToneSink::new());

        assert_eq!(demo.digit().get(), 5);
        assert_eq!(knob.current_brightness().get(), 60);
        assert_eq!(knob.current_color(), digit::color(demo.digit()));
        // Baseline in the upper range does not flip the mode.
        assert_eq!(demo.reversals(), 0);
    }

    #[test]
    fn movement_writes_brightness_then_colour() {
        let mut demo = DigitDemo::new();
        let mut knob = MockKnob::default();
        let mut tracker = PositionTracker::new(p(2));
        demo.on_start(p(2), &mut knob, &mut MockToneSink::new());
        knob.clear_commands();

        step(&mut demo, &mut tracker, &mut knob, 3);

        let d = Digit::new(3).unwrap();
        assert_eq!(
            knob.commands(),
            &[
                KnobCommand::SetBrightness(digit::brightness(d)),
                KnobCommand::SetColor(digit::color(d)),
            ]
        );
    }

    #[test]
    fn entering_upper_range_flips_mode_once() {
        let mut demo = DigitDemo::new();
        let mut knob = MockKnob::default();
        let mut tracker = PositionTracker::new(p(7));
        demo.on_start(p(7), &mut knob, &mut MockToneSink::new());

        step(&mut demo, &mut tracker, &mut knob, 8);
        assert_eq!(demo.reversals(), 0);

        step(&mut demo, &mut tracker, &mut knob, 9);
        assert_eq!(demo.reversals(), 1);
        assert_eq!(knob.current_direction_mode(), Direction::CounterClockwise);

        // Staying in 9..=15 does not flip again.
        step(&mut demo, &mut tracker, &mut knob, 10);
        step(&mut demo, &mut tracker, &mut knob, 14);
        assert_eq!(demo.reversals(), 1);

        let flips = knob
            .commands()
            .iter()
            .filter(|c| matches!(c, KnobCommand::SetDirectionMode(_)))
            .count();
        assert_eq!(flips, 1);
    }

    #[test]
    fn second_entry_flips_back() {
        let mut demo = DigitDemo::new();
        let mut knob = MockKnob::default();
        let mut tracker = PositionTracker::new(p(8));
        demo.on_start(p(8), &mut knob, &mut MockToneSink::new());

        step(&mut demo, &mut tracker, &mut knob, 9);
        step(&mut demo, &mut tracker, &mut knob, 8);
        step(&mut demo, &mut tracker, &mut knob, 9);

        assert_eq!(demo.reversals(), 2);
        assert_eq!(knob.current_direction_mode(), Direction::Clockwise);
    }

    #[test]
    fn continuous_turn_bounces_between_zero_and_eight() {
        // Turn the physical knob clockwise one detent at a time. After the
        // first entry into 9..=15 the counter runs backward, so the shown
        // digit stays within 0..=8.
        let mut demo = DigitDemo::new();
        let mut knob = MockKnob::new(p(0));
        let mut tracker = PositionTracker::new(p(0));
        demo.on_start(p(0), &mut knob, &mut MockToneSink::new());

        let mut seen = [false; 9];
        seen[demo.digit().index()] = true;
        for _ in 0..12 {
            knob.turn(1);
            let to = knob.value().get();
            step(&mut demo, &mut tracker, &mut knob, to);
            seen[demo.digit().index()] = true;
        }

        assert_eq!(demo.reversals(), 1);
        assert!(seen.iter().all(|&s| s));
    }
}
