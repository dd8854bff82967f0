use crate::tables::POSITION_COUNT;

/// Absolute rotary index reported by the knob unit.
///
/// Always within `0..=15`. The hardware counter is 4 bits wide, so turning
/// past 15 wraps to 0 and turning below 0 wraps to 15.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position(u8);

impl Position {
    /// Lowest position.
    pub const MIN: Position = Position(0);

    /// Highest position.
    pub const MAX: Position = Position(POSITION_COUNT as u8 - 1);

    /// Every position in ascending order.
    pub const ALL: [Position; POSITION_COUNT] = {
        let mut all = [Position(0); POSITION_COUNT];
        let mut i = 0;
        while i < POSITION_COUNT {
            all[i] = Position(i as u8);
            i += 1;
        }
        all
    };

    /// Validate a raw reading.
    ///
    /// Returns `None` if `raw > 15`.
    pub const fn new(raw: u8) -> Option<Self> {
        if (raw as usize) < POSITION_COUNT {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Keep only the low 4 bits of a raw register value.
    ///
    /// Total over `u8`; this is what the 4-bit counter actually delivers.
    pub const fn from_bits(raw: u8) -> Self {
        Self(raw & 0x0F)
    }

    /// The raw value (`0..=15`).
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The raw value as a table index.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
