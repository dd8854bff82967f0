//! Fixed lookup tables and constants for the knob unit mappers.
//!
//! Every table is indexed directly by a [`Position`](crate::Position) or a
//! [`Digit`](crate::Digit), so each mapper is total over its domain by
//! construction.

use embedded_graphics::pixelcolor::Rgb888;

// ---------------------------------------------------------------------------
// Encoder geometry
// ---------------------------------------------------------------------------

/// Number of detents on the knob (4-bit counter).
pub const POSITION_COUNT: usize = 16;

// ---------------------------------------------------------------------------
// Tone mapper
// ---------------------------------------------------------------------------

/// C-major scale from C4 to D6 in Hz, one note per position.
pub const TONE_TABLE_HZ: [u32; POSITION_COUNT] = [
    262, 294, 330, 349, 392, 440, 494, 523, // C4 D4 E4 F4 G4 A4 B4 C5
    587, 659, 698, 784, 880, 988, 1047, 1175, // D5 E5 F5 G5 A5 B5 C6 D6
];

/// Length of every mapped tone.
pub const TONE_DURATION_MS: u32 = 100;

/// Counter-clockwise pitch ratio (0.8) as `NUM / DEN`.
pub const CCW_PITCH_NUM: u32 = 4;
pub const CCW_PITCH_DEN: u32 = 5;

// ---------------------------------------------------------------------------
// Digit folder
// ---------------------------------------------------------------------------

/// Highest folded digit. Raw positions above this fold back down.
pub const DIGIT_MAX: u8 = 8;

/// Number of distinct folded digits (0–8).
pub const DIGIT_COUNT: usize = DIGIT_MAX as usize + 1;

/// `raw in 9..=15` folds to `FOLD_PIVOT - raw`.
pub const FOLD_PIVOT: u8 = 17;

/// Brightness percentage per digit. Never below 10.
pub const DIGIT_BRIGHTNESS: [u8; DIGIT_COUNT] = [10, 20, 30, 40, 50, 60, 70, 80, 90];

/// Cold → warm gradient, one colour per digit.
pub const DIGIT_COLORS: [Rgb888; DIGIT_COUNT] = [
    Rgb888::new(0, 0, 255),
    Rgb888::new(0, 80, 255),
    Rgb888::new(0, 170, 255),
    Rgb888::new(0, 255, 200),
    Rgb888::new(0, 255, 60),
    Rgb888::new(170, 255, 0),
    Rgb888::new(255, 200, 0),
    Rgb888::new(255, 110, 0),
    Rgb888::new(255, 0, 0),
];

// ---------------------------------------------------------------------------
// Palette mapper
// ---------------------------------------------------------------------------

/// Sixteen distinct indicator colours, one per position.
pub const PALETTE: [Rgb888; POSITION_COUNT] = [
    Rgb888::new(255, 0, 0),     // red
    Rgb888::new(255, 96, 0),    // orange
    Rgb888::new(255, 200, 0),   // amber
    Rgb888::new(255, 255, 0),   // yellow
    Rgb888::new(160, 255, 0),   // lime
    Rgb888::new(0, 255, 0),     // green
    Rgb888::new(0, 255, 128),   // spring
    Rgb888::new(0, 255, 255),   // cyan
    Rgb888::new(0, 128, 255),   // azure
    Rgb888::new(0, 0, 255),     // blue
    Rgb888::new(128, 0, 255),   // violet
    Rgb888::new(255, 0, 255),   // magenta
    Rgb888::new(255, 0, 128),   // rose
    Rgb888::new(255, 128, 160), // pink
    Rgb888::new(255, 220, 180), // warm white
    Rgb888::new(255, 255, 255), // white
];

/// Maximum per-channel change per transition tick.
pub const EASE_STEP: u8 = 8;

/// Period of the colour transition timer.
pub const TRANSITION_INTERVAL_MS: u64 = 20;

// ---------------------------------------------------------------------------
// Colour wheel
// ---------------------------------------------------------------------------

/// Hue distance between adjacent positions on the colour wheel (360 / 16).
pub const WHEEL_DEGREES_PER_POSITION: f32 = 360.0 / POSITION_COUNT as f32;

// ── Tests ────────────────────────────────────────────────────────────────
