//! Rotation direction and the cyclic direction detector.
//!
//! The 16 positions form a ring. Between two consecutive readings the
//! detector assumes the knob moved by a single detent:
//!
//! ```text
//!   0 → 15   counter-clockwise (wrapped backward)
//!  15 →  0   clockwise         (wrapped forward)
//!   a →  b   clockwise if b > a, counter-clockwise if b < a
//! ```
//!
//! Any other jump is classified by the plain numeric comparison. A fast
//! turn that skips from 2 to 13 between two ticks reads as clockwise even if
//! the knob actually went backward through 0; intended behaviour under fast
//! rotation is undefined, so the single-step approximation is kept as is.

use crate::position::Position;

/// Rotation direction, also used as the knob unit's direction mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Position increases as the knob turns.
    #[default]
    Clockwise,
    /// Position decreases as the knob turns.
    CounterClockwise,
}

impl Direction {
    /// The opposite direction.
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Classify the movement between two consecutive readings.
///
/// Returns `None` when `previous == current`.
///
/// # Examples
///
/// ```
/// use dial::{direction::detect, Direction, Position};
///
/// let p = |raw| Position::new(raw).unwrap();
/// assert_eq!(detect(p(3), p(4)), Some(Direction::Clockwise));
/// assert_eq!(detect(p(0), p(15)), Some(Direction::CounterClockwise));
/// assert_eq!(detect(p(15), p(0)), Some(Direction::Clockwise));
/// assert_eq!(detect(p(7), p(7)), None);
/// ```
pub fn detect(previous: Position, current: Position) -> Option<Direction> {
    if previous == current {
        return None;
    }

    let direction = if previous == Position::MIN && current == Position::MAX {
        Direction::CounterClockwise
    } else if previous == Position::MAX && current == Position::MIN {
        Direction::Clockwise
    } else if current > previous {
        Direction::Clockwise
    } else {
        Direction::CounterClockwise
    };

    Some(direction)
}

// ── Tests ────────────────────────────────────────────────────────────────
