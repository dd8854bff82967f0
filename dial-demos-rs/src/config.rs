//! Session configuration.

use dial::tables::TRANSITION_INTERVAL_MS;
use dial::{Brightness, Direction};

/// Configuration for a [`Session`](crate::Session) and its polling loop.
///
/// All timing and startup settings live here. [`SessionConfig::default()`]
/// reproduces the stock behaviour: poll every 50 ms, colour transitions
/// every 20 ms, clockwise mode, half brightness, display on, nothing
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionConfig {
    /// Period between position reads in ms. Default: 50.
    pub poll_period_ms: u64,
    /// Period between colour transition ticks in ms. Default: 20.
    pub transition_interval_ms: u64,

    // ── Applied once after `begin()` ─────────────────────────────────
    /// Direction mode written at startup. Default: clockwise.
    pub start_direction: Direction,
    /// Indicator brightness written at startup. Default: 50 %.
    pub start_brightness: Brightness,
    /// Segment display state written at startup. Default: on.
    pub display_enabled: bool,
    /// Persist the startup settings with `save_config(All)`. Default: off.
    pub persist_on_start: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            poll_period_ms: 50,
            transition_interval_ms: TRANSITION_INTERVAL_MS,
            start_direction: Direction::Clockwise,
            start_brightness: Brightness::new(50),
            display_enabled: true,
            persist_on_start: false,
        }
    }
}

impl SessionConfig {
    /// Position reads per second.
    ///
    /// Formula: `1000 / poll_period_ms`. A zero period is treated as 1 ms.
    pub fn poll_rate_hz(&self) -> u64 {
        1000 / self.poll_period_ms.max(1)
    }

    /// Transition ticks between two position reads, rounded down.
    pub fn transitions_per_poll(&self) -> u64 {
        self.poll_period_ms / self.transition_interval_ms.max(1)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
