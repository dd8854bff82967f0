use dial::{color, tone, Knob, Movement, Position, ToneSink};

use super::Demo;

/// Plays a scale note per detent and paints the colour wheel.
///
/// Clockwise turns play the note for the new position; counter-clockwise
/// turns play it at 0.8× pitch. The indicator follows a 16-step rainbow.
#[derive(Debug, Default, Clone, Copy)]
pub struct ToneDemo;

impl ToneDemo {
    pub const fn new() -> Self {
        Self
    }
}

impl Demo for ToneDemo {
    fn name(&self) -> &'static str {
        "tone"
    }

    fn on_start<K: Knob, S: ToneSink>(&mut self, baseline: Position, knob: &mut K, _sink: &mut S) {
        knob.set_color(color::wheel(baseline));
    }

    fn on_movement<K: Knob, S: ToneSink>(
        &mut self,
        movement: Movement,
        knob: &mut K,
        sink: &mut S,
    ) {
        let note = tone::map(movement.current, movement.direction);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "tone: position {} {} -> {} Hz",
            movement.current,
            movement.direction,
            note.frequency_hz
        );

        sink.play_tone(note);
        knob.set_color(color::wheel(movement.current));
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use dial::mock::{KnobCommand, MockKnob, MockToneSink};
    use dial::{Direction, PositionTracker, Tone};

    fn p(raw: u8) -> Position {
        Position::new(raw).unwrap()
    }

    #[test]
    fn start_paints_wheel_colour() {
        let mut demo = ToneDemo::new();
        let mut knob = MockKnob::new(p(8));
        let mut sink = MockToneSink::new();

        demo.on_start(p(8), &mut knob, &mut sink);

        assert_eq!(knob.current_color(), color::wheel(p(8)));
        assert!(sink.tones().is_empty());
    }

    #[test]
    fn clockwise_step_plays_table_note() {
        let mut demo = ToneDemo::new();
        let mut knob = MockKnob::default();
        let mut sink = MockToneSink::new();
        let movement = PositionTracker::new(p(4)).observe(p(5)).unwrap();

        demo.on_movement(movement, &mut knob, &mut sink);

        assert_eq!(sink.last(), Some(Tone::new(440, 100)));
        assert_eq!(knob.commands(), &[KnobCommand::SetColor(color::wheel(p(5)))]);
    }

    #[test]
    fn counter_clockwise_step_plays_lower_note() {
        let mut demo = ToneDemo::new();
        let mut knob = MockKnob::default();
        let mut sink = MockToneSink::new();
        let movement = PositionTracker::new(p(6)).observe(p(5)).unwrap();
        assert_eq!(movement.direction, Direction::CounterClockwise);

        demo.on_movement(movement, &mut knob, &mut sink);

        assert_eq!(sink.last(), Some(Tone::new(352, 100)));
    }

    #[test]
    fn backward_wrap_plays_lowered_top_note() {
        let mut demo = ToneDemo::new();
        let mut knob = MockKnob::default();
        let mut sink = MockToneSink::new();
        let movement = PositionTracker::new(p(0)).observe(p(15)).unwrap();

        demo.on_movement(movement, &mut knob, &mut sink);

        assert_eq!(sink.last(), Some(Tone::new(940, 100)));
    }
}
