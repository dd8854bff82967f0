//! Error types for starting a knob session.

use core::fmt;

/// Errors that can occur when connecting to the knob unit.
///
/// This is the only failure the crate models: once [`Knob::begin`]
/// succeeds, every other collaborator call is assumed to succeed.
///
/// [`Knob::begin`]: crate::Knob::begin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartError<E> {
    /// The device did not answer at its configured address.
    Unreachable(E),
}

// Allow ergonomic `?` propagation from the driver's own error.
impl<E> From<E> for StartError<E> {
    fn from(error: E) -> Self {
        StartError::Unreachable(error)
    }
}

impl<E: fmt::Debug> fmt::Display for StartError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StartError::Unreachable(e) => write!(f, "Knob unit unreachable: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for StartError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            StartError::Unreachable(e) => defmt::write!(f, "Knob unit unreachable: {}", e),
        }
    }
}
