use crate::direction::{self, Direction};
use crate::position::Position;

/// A change between two consecutive readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Movement {
    pub previous: Position,
    pub current: Position,
    pub direction: Direction,
}

/// Holds the last observed reading and reports changes.
///
/// The tracker keeps exactly one position: the reading from the previous
/// tick. It performs no I/O; the caller reads the knob and hands the value
/// to [`observe`](Self::observe).
///
/// # Examples
///
/// ```
/// use dial::{Direction, Position, PositionTracker};
///
/// let mut tracker = PositionTracker::new(Position::MAX);
/// let movement = tracker.observe(Position::MIN).unwrap();
/// assert_eq!(movement.direction, Direction::Clockwise);
///
/// // Same reading again: nothing to report.
/// assert!(tracker.observe(Position::MIN).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PositionTracker {
    last: Position,
}

impl PositionTracker {
    /// Start tracking from a baseline reading.
    pub const fn new(baseline: Position) -> Self {
        Self { last: baseline }
    }

    /// The most recent reading.
    pub const fn last(&self) -> Position {
        self.last
    }

    /// Replace the stored reading without reporting a movement.
    pub fn reset(&mut self, baseline: Position) {
        self.last = baseline;
    }

    /// Record a reading. Returns the movement if it differs from the last one.
    pub fn observe(&mut self, current: Position) -> Option<Movement> {
        let previous = self.last;
        self.last = current;

        direction::detect(previous, current).map(|direction| Movement {
            previous,
            current,
            direction,
        })
    }
}

impl Default for PositionTracker {
    fn default() -> Self {
        Self::new(Position::MIN)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn p(raw: u8) -> Position {
        Position::new(raw).unwrap()
    }

    #[test]
    fn unchanged_reading_reports_nothing() {
        let mut tracker = PositionTracker::new(p(4));
        assert!(tracker.observe(p(4)).is_none());
        assert_eq!(tracker.last(), p(4));
    }

    #[test]
    fn change_reports_previous_and_current() {
        let mut tracker = PositionTracker::new(p(4));
        let movement = tracker.observe(p(5)).unwrap();
        assert_eq!(movement.previous, p(4));
        assert_eq!(movement.current, p(5));
        assert_eq!(movement.direction, Direction::Clockwise);
        assert_eq!(tracker.last(), p(5));
    }

    #[test]
    fn full_clockwise_turn_wraps_forward() {
        let mut tracker = PositionTracker::new(p(0));
        for raw in (1..=15u8).chain(core::iter::once(0)) {
            let movement = tracker.observe(p(raw)).unwrap();
            assert_eq!(movement.direction, Direction::Clockwise, "at {}", raw);
        }
    }

    #[test]
    fn full_counter_clockwise_turn_wraps_backward() {
        let mut tracker = PositionTracker::new(p(0));
        for raw in (1..=15u8).rev() {
            let movement = tracker.observe(p(raw)).unwrap();
            assert_eq!(movement.direction, Direction::CounterClockwise, "at {}", raw);
        }
        let back_home = tracker.observe(p(0)).unwrap();
        assert_eq!(back_home.direction, Direction::CounterClockwise);
    }

    #[test]
    fn reset_moves_baseline_silently() {
        let mut tracker = PositionTracker::default();
        tracker.reset(p(10));
        assert_eq!(tracker.last(), p(10));
        assert!(tracker.observe(p(10)).is_none());
    }
}
