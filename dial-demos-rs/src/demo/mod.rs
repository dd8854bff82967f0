//! Demo policies driven by a [`Session`](crate::Session).
//!
//! Each demo turns knob movements into collaborator writes:
//!
//! | Demo            | On movement                                     | Transition tick      |
//! |-----------------|-------------------------------------------------|----------------------|
//! | [`ToneDemo`]    | play the scale note, paint the colour wheel     | —                    |
//! | [`DigitDemo`]   | fold to 0–8, set brightness + colour, flip mode | —                    |
//! | [`PaletteDemo`] | look up the palette colour                      | ease toward it       |

mod digit;
mod palette;
mod tone;

pub use digit::DigitDemo;
pub use palette::{PaletteDemo, TransitionMode};
pub use tone::ToneDemo;

use dial::{Knob, Movement, Position, ToneSink};

/// A policy reacting to knob movements.
///
/// Demos own whatever state their policy needs; the session owns the
/// collaborators and lends them for the duration of each call.
pub trait Demo {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Called once after a successful `begin()`, with the first reading.
    fn on_start<K: Knob, S: ToneSink>(
        &mut self,
        _baseline: Position,
        _knob: &mut K,
        _sink: &mut S,
    ) {
    }

    /// Called on every tick whose reading differs from the previous one.
    fn on_movement<K: Knob, S: ToneSink>(&mut self, movement: Movement, knob: &mut K, sink: &mut S);

    /// Called on every transition tick, independent of movement.
    fn on_transition_tick<K: Knob>(&mut self, _knob: &mut K) {}
}
