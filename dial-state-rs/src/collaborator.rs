//! Interfaces to the external collaborators: the knob unit's peripheral
//! driver and the tone output.
//!
//! The bus protocol behind these calls belongs to the driver. From this
//! crate's point of view every call is synchronous and, apart from
//! [`Knob::begin`], cannot fail.

use embedded_graphics::pixelcolor::Rgb888;

use crate::direction::Direction;
use crate::position::Position;
use crate::tone::Tone;

/// Indicator brightness in percent, always within `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness(u8);

impl Brightness {
    /// Full brightness.
    pub const FULL: Brightness = Brightness(100);

    /// Clamp `percent` to `0..=100`.
    pub const fn new(percent: u8) -> Self {
        if percent > 100 {
            Self(100)
        } else {
            Self(percent)
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Group of settings persisted by [`Knob::save_config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigSection {
    Direction,
    Color,
    Brightness,
    Display,
    /// Every section at once.
    All,
}

/// Peripheral driver for the knob unit.
///
/// # Example
///
/// ```ignore
/// let mut knob = MyKnobDriver::new(i2c, 0x40);
/// knob.begin()?;
///
/// knob.set_brightness(Brightness::new(40));
/// let position = knob.value();
/// ```
pub trait Knob {
    /// Error reported when the device cannot be reached.
    type Error;

    /// Connect to the device at its configured address.
    ///
    /// # Errors
    ///
    /// Fails if the device does not answer. Nothing else is reported as an
    /// error by this trait.
    fn begin(&mut self) -> Result<(), Self::Error>;

    /// Last sampled 4-bit position.
    fn value(&mut self) -> Position;

    /// Which rotation increments the position.
    fn direction_mode(&mut self) -> Direction;

    fn set_direction_mode(&mut self, mode: Direction);

    /// Current indicator colour.
    fn color(&mut self) -> Rgb888;

    fn set_color(&mut self, color: Rgb888);

    fn brightness(&mut self) -> Brightness;

    fn set_brightness(&mut self, brightness: Brightness);

    /// Turn the segment display on or off.
    fn set_display_enabled(&mut self, enabled: bool);

    /// Persist the current settings of `section` to the unit's storage.
    ///
    /// Fire-and-forget: there is no acknowledgement.
    fn save_config(&mut self, section: ConfigSection);
}

/// Audio output. Playback is fire-and-forget.
pub trait ToneSink {
    fn play_tone(&mut self, tone: Tone);
}

// A borrowed collaborator can be handed to a session while the caller
// keeps ownership.

impl<T: Knob + ?Sized> Knob for &mut T {
    type Error = T::Error;

    fn begin(&mut self) -> Result<(), Self::Error> {
        T::begin(self)
    }

    fn value(&mut self) -> Position {
        T::value(self)
    }

    fn direction_mode(&mut self) -> Direction {
        T::direction_mode(self)
    }

    fn set_direction_mode(&mut self, mode: Direction) {
        T::set_direction_mode(self, mode)
    }

    fn color(&mut self) -> Rgb888 {
        T::color(self)
    }

    fn set_color(&mut self, color: Rgb888) {
        T::set_color(self, color)
    }

    fn brightness(&mut self) -> Brightness {
        T::brightness(self)
    }

    fn set_brightness(&mut self, brightness: Brightness) {
        T::set_brightness(self, brightness)
    }

    fn set_display_enabled(&mut self, enabled: bool) {
        T::set_display_enabled(self, enabled)
    }

    fn save_config(&mut self, section: ConfigSection) {
        T::save_config(self, section)
    }
}

impl<T: ToneSink + ?Sized> ToneSink for &mut T {
    fn play_tone(&mut self, tone: Tone) {
        T::play_tone(self, tone)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
