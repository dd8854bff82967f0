//! Position tracking and value mapping for a 16-position rotary knob unit.
//!
//! The knob unit reports an absolute 4-bit position (0–15) that wraps in
//! both directions, and carries an RGB indicator, a brightness setting, a
//! direction mode and a small segment display. This crate holds the part of
//! the firmware that has actual policy in it: turning consecutive readings
//! into a rotation direction and mapping each position to a tone, a folded
//! digit or a palette colour.
//!
//! Nothing here performs I/O. The peripheral driver and the tone output are
//! consumed through the [`Knob`] and [`ToneSink`] traits, so every mapper
//! and the [`PositionTracker`] can be exercised without hardware.
//!
//! # Layout
//!
//! ```text
//! Knob::value() ─► PositionTracker ─► Movement { previous, current, direction }
//!                                         │
//!            ┌────────────────────────────┼─────────────────────────┐
//!            ▼                            ▼                         ▼
//!    tone::map                 digit::fold                palette::color
//!    + color::wheel            + ReversalLatch            + ColorEaser
//! ```
//!
//! # Features
//!
//! - **`defmt`** — [`defmt::Format`] implementations for logging on
//!   embedded targets.
//! - **`mock`** — [`mock::MockKnob`] and [`mock::MockToneSink`], recording
//!   fakes of the collaborator traits for tests in downstream crates.

#![no_std]

pub mod collaborator;
pub mod color;
pub mod digit;
pub mod direction;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod palette;
pub mod position;
pub mod tables;
pub mod tone;
pub mod tracker;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use collaborator::{Brightness, ConfigSection, Knob, ToneSink};
pub use digit::{Digit, ReversalLatch};
pub use direction::Direction;
pub use error::StartError;
pub use palette::ColorEaser;
pub use position::Position;
pub use tone::Tone;
pub use tracker::{Movement, PositionTracker};

/// RGB colour type used throughout the crate.
pub use embedded_graphics::pixelcolor::Rgb888;
