//! Audible pattern signalling a knob unit that never answered `begin()`.
//!
//! The indicator LED lives on the unreachable unit, so the fault is
//! signalled through the tone sink only: three short beeps, then a long
//! pause, repeated until power-cycle.

use dial::Tone;

/// One beep of the fault pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaultStep {
    pub tone: Tone,
    /// Delay from the start of this beep to the start of the next one.
    pub pause_ms: u64,
}

/// Beep used for the fault pattern.
pub const FAULT_TONE: Tone = Tone::new(880, 100);

/// Three short beeps and a one-second gap.
pub const FAULT_PATTERN: [FaultStep; 3] = [
    FaultStep {
        tone: FAULT_TONE,
        pause_ms: 200,
    },
    FaultStep {
        tone: FAULT_TONE,
        pause_ms: 200,
    },
    FaultStep {
        tone: FAULT_TONE,
        pause_ms: 1000,
    },
];

/// Length of one full pattern repetition in ms.
pub fn pattern_period_ms() -> u64 {
    FAULT_PATTERN.iter().map(|step| step.pause_ms).sum()
}

// ── Tests ────────────────────────────────────────────────────────────────
