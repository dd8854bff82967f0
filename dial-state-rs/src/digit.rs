//! Digit folder.
//!
//! Folds the 16 raw positions onto the digits 0–8 as a triangle wave:
//!
//! ```text
//! raw   :  0 1 2 3 4 5 6 7 8 | 9 10 11 12 13 14 15
//! digit :  0 1 2 3 4 5 6 7 8 | 8  7  6  5  4  3  2
//! ```
//!
//! Past 8 the shown digit runs back down while the physical counter keeps
//! incrementing. To make the knob follow the display, the caller flips the
//! unit's direction mode when the raw reading enters the upper half; the
//! [`ReversalLatch`] decides when that happens.

use embedded_graphics::pixelcolor::Rgb888;

use crate::collaborator::Brightness;
use crate::position::Position;
use crate::tables::{DIGIT_BRIGHTNESS, DIGIT_COLORS, DIGIT_MAX, FOLD_PIVOT};

/// A folded digit, always within `0..=8`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// Returns `None` if `raw > 8`.
    pub const fn new(raw: u8) -> Option<Self> {
        if raw <= DIGIT_MAX {
            Some(Self(raw))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Fold a raw position onto `0..=8`.
///
/// Folding is idempotent: a digit read back as a position folds to itself.
pub const fn fold(position: Position) -> Digit {
    let raw = position.get();
    if raw <= DIGIT_MAX {
        Digit(raw)
    } else {
        Digit(FOLD_PIVOT - raw)
    }
}

/// Returns `true` for raw positions that fold back down (`9..=15`).
pub const fn in_upper_range(position: Position) -> bool {
    position.get() > DIGIT_MAX
}

/// Indicator brightness for a digit, 10 % to 90 %.
pub const fn brightness(digit: Digit) -> Brightness {
    Brightness::new(DIGIT_BRIGHTNESS[digit.index()])
}

/// Indicator colour for a digit, cold (0) to warm (8).
pub const fn color(digit: Digit) -> Rgb888 {
    DIGIT_COLORS[digit.index()]
}

/// Edge detector for the raw reading entering `9..=15`.
///
/// [`observe`](Self::observe) reports the entry once; staying in the upper
/// range does not fire again until the reading has dropped back to 8 or
/// below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReversalLatch {
    in_upper: bool,
}

impl ReversalLatch {
    /// Seed from the baseline reading. A baseline already in the upper range
    /// counts as "already entered" and does not fire.
    pub const fn new(baseline: Position) -> Self {
        Self {
            in_upper: in_upper_range(baseline),
        }
    }

    /// Record a reading. Returns `true` if it just entered the upper range.
    pub fn observe(&mut self, position: Position) -> bool {
        let upper = in_upper_range(position);
        let entered = upper && !self.in_upper;
        self.in_upper = upper;
        entered
    }

    pub const fn is_in_upper_range(&self) -> bool {
        self.in_upper
    }
}

impl Default for ReversalLatch {
    fn default() -> Self {
        Self::new(Position::MIN)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
