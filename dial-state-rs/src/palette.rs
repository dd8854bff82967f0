//! Palette mapper and the colour easer.
//!
//! [`color`] is a direct 16-entry lookup. [`ColorEaser`] fades the displayed
//! colour toward the looked-up target one bounded step per transition tick.
//! The transition timer runs independently of position polling.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

use crate::position::Position;
use crate::tables::{EASE_STEP, PALETTE};

/// Palette colour for a position.
pub const fn color(position: Position) -> Rgb888 {
    PALETTE[position.index()]
}

/// Per-channel linear fade from the current colour to a target colour.
///
/// Each [`step`](Self::step) moves every channel by at most `step` toward
/// its target. A channel that would cross its target stops exactly on it,
/// so the fade never overshoots or oscillates. Once all three channels
/// match, the easer is idle until a new target is set.
///
/// # Example
///
/// ```
/// use dial::{ColorEaser, Rgb888};
///
/// let mut easer = ColorEaser::new(Rgb888::new(0, 0, 0));
/// easer.set_target(Rgb888::new(255, 0, 0));
///
/// let mut ticks = 0;
/// while easer.step().is_some() {
///     ticks += 1;
/// }
/// assert_eq!(ticks, 32);
/// assert_eq!(easer.current(), Rgb888::new(255, 0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorEaser {
    current: Rgb888,
    target: Rgb888,
    step: u8,
}

impl ColorEaser {
    /// Start settled at `start` with the default step of [`EASE_STEP`].
    pub const fn new(start: Rgb888) -> Self {
        Self {
            current: start,
            target: start,
            step: EASE_STEP,
        }
    }

    /// Override the per-tick step. A step of 0 is raised to 1.
    pub const fn with_step(mut self, step: u8) -> Self {
        self.step = if step == 0 { 1 } else { step };
        self
    }

    pub const fn current(&self) -> Rgb888 {
        self.current
    }

    pub const fn target(&self) -> Rgb888 {
        self.target
    }

    pub const fn step_size(&self) -> u8 {
        self.step
    }

    /// Retarget the fade. The current colour is kept.
    pub fn set_target(&mut self, target: Rgb888) {
        self.target = target;
    }

    /// Returns `true` once the current colour equals the target.
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Advance one transition tick.
    ///
    /// Returns the new colour, or `None` if already settled.
    pub fn step(&mut self) -> Option<Rgb888> {
        if self.is_settled() {
            return None;
        }

        self.current = Rgb888::new(
            approach(self.current.r(), self.target.r(), self.step),
            approach(self.current.g(), self.target.g(), self.step),
            approach(self.current.b(), self.target.b(), self.step),
        );
        Some(self.current)
    }

    /// Jump straight to the target and return it.
    pub fn snap_to_target(&mut self) -> Rgb888 {
        self.current = self.target;
        self.current
    }
}

impl Default for ColorEaser {
    fn default() -> Self {
        Self::new(Rgb888::BLACK)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ColorEaser {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "ColorEaser {{ current: ({}, {}, {}), target: ({}, {}, {}), step: {} }}",
            self.current.r(),
            self.current.g(),
            self.current.b(),
            self.target.r(),
            self.target.g(),
            self.target.b(),
            self.step
        );
    }
}

/// Move `current` toward `target` by at most `step`, clamping at `target`.
fn approach(current: u8, target: u8, step: u8) -> u8 {
    if current < target {
        current.saturating_add(step).min(target)
    } else {
        current.saturating_sub(step).max(target)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
