//! Polling session and demo policies for the 16-position rotary knob unit.
//!
//! This crate ties the mappers from [`dial`] to the collaborators: a
//! [`Session`] owns the knob driver, the tone sink and one [`Demo`], and
//! performs a tick at a time. The optional [`task`] module runs that
//! session forever on an `embassy-time` schedule.
//!
//! # Quick Start
//!
//! ```ignore
//! use dial_demos_rs::{DigitDemo, Session, SessionConfig};
//!
//! // `knob` implements `dial::Knob`, `buzzer` implements `dial::ToneSink`.
//! let session = Session::new(knob, buzzer, DigitDemo::new(), SessionConfig::default());
//! spawner.spawn(knob_task(session)).unwrap();
//!
//! // Thin task wrapper (Embassy tasks cannot be generic):
//! #[embassy_executor::task]
//! async fn knob_task(session: Session<MyKnob, MyBuzzer, DigitDemo>) {
//!     dial_demos_rs::task::run(session).await
//! }
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging via [`defmt`].
//! - **`task`** — the async polling loop ([`task::run`], [`task::halt`]).

#![no_std]

pub mod config;
pub mod demo;
pub mod fault;
pub mod session;
#[cfg(feature = "task")]
pub mod task;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use config::SessionConfig;
pub use demo::{Demo, DigitDemo, PaletteDemo, ToneDemo, TransitionMode};
pub use fault::{FaultStep, FAULT_PATTERN};
pub use session::Session;
