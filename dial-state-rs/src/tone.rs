use crate::direction::Direction;
use crate::position::Position;
use crate::tables::{CCW_PITCH_DEN, CCW_PITCH_NUM, TONE_DURATION_MS, TONE_TABLE_HZ};

/// A tone to play through the sink collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tone {
    /// Frequency of the tone in Hz.
    pub frequency_hz: u32,
    /// Duration of the tone in ms.
    pub duration_ms: u32,
}

impl Tone {
    pub const fn new(frequency_hz: u32, duration_ms: u32) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }
}

/// Map a position and rotation direction to a tone.
///
/// The scale note for `position` is played as is when turning clockwise and
/// at 0.8× pitch when turning counter-clockwise, so the two directions are
/// audibly different. Duration is always [`TONE_DURATION_MS`].
///
/// ```
/// use dial::{tone, Direction, Position};
///
/// let a4 = Position::new(5).unwrap();
/// assert_eq!(tone::map(a4, Direction::Clockwise).frequency_hz, 440);
/// assert_eq!(tone::map(a4, Direction::CounterClockwise).frequency_hz, 352);
/// ```
pub fn map(position: Position, direction: Direction) -> Tone {
    let base = TONE_TABLE_HZ[position.index()];
    let frequency_hz = match direction {
        Direction::Clockwise => base,
        Direction::CounterClockwise => base * CCW_PITCH_NUM / CCW_PITCH_DEN,
    };
    Tone::new(frequency_hz, TONE_DURATION_MS)
}

// ── Tests ────────────────────────────────────────────────────────────────
