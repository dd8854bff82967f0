//! Polling loop and fault halt.
//!
//! Both are regular `async fn`s, **not** Embassy `#[task]`s. Callers
//! create a thin, concrete task wrapper, since Embassy tasks cannot be
//! generic:
//!
//! ```ignore
//! #[embassy_executor::task]
//! async fn knob_task(session: Session<MyKnob, MyBuzzer, DigitDemo>) {
//!     dial_demos_rs::task::run(session).await
//! }
//! ```

use embassy_time::{Duration, Instant, Timer};

use dial::{Knob, ToneSink};

use crate::config::SessionConfig;
use crate::demo::Demo;
use crate::fault::FAULT_PATTERN;
use crate::session::Session;

/// Start the session and poll it forever.
///
/// # Control flow
///
/// 1. `begin()`. On failure: log and [`halt`], never returns.
/// 2. Loop, sleeping until the earlier of the two deadlines:
///    - **poll** every `poll_period_ms` — one read, demo on change;
///    - **transition** every `transition_interval_ms` — demo easing.
///
/// Both deadlines are served from this one task; nothing is shared.
pub async fn run<K, S, D>(mut session: Session<K, S, D>) -> !
where
    K: Knob,
    S: ToneSink,
    D: Demo,
{
    if session.begin().is_err() {
        #[cfg(feature = "defmt")]
        defmt::error!("Knob unit did not answer begin(); halting");
        halt(session.sink_mut()).await
    }

    #[cfg(feature = "defmt")]
    {
        let config = session.config();
        defmt::info!(
            "{}: polling at {} Hz, {} transition ticks per poll",
            session.demo().name(),
            config.poll_rate_hz(),
            config.transitions_per_poll()
        );
    }

    let mut schedule = Schedule::new(Instant::now(), session.config());

    loop {
        Timer::at(schedule.next_wake()).await;

        let due = schedule.take_due(Instant::now());
        if due.poll {
            session.poll();
        }
        if due.transition {
            session.transition_tick();
        }
    }
}

/// Play [`FAULT_PATTERN`] forever.
///
/// There is no recovery path: the unit must be reconnected or power-cycled.
pub async fn halt<S: ToneSink>(sink: &mut S) -> ! {
    #[cfg(feature = "defmt")]
    defmt::warn!("signalling fault every {} ms", crate::fault::pattern_period_ms());

    loop {
        for step in FAULT_PATTERN {
            sink.play_tone(step.tone);
            Timer::after_millis(step.pause_ms).await;
        }
    }
}

// ── Deadlines ────────────────────────────────────────────────────────────

/// Which ticks are due at a wake-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Due {
    pub poll: bool,
    pub transition: bool,
}

/// The two independent tick deadlines of [`run`].
pub(crate) struct Schedule {
    poll_period: Duration,
    transition_interval: Duration,
    next_poll: Instant,
    next_transition: Instant,
}

impl Schedule {
    pub fn new(now: Instant, config: &SessionConfig) -> Self {
        let poll_period = Duration::from_millis(config.poll_period_ms.max(1));
        let transition_interval = Duration::from_millis(config.transition_interval_ms.max(1));
        Self {
            poll_period,
            transition_interval,
            next_poll: now + poll_period,
            next_transition: now + transition_interval,
        }
    }

    pub fn next_wake(&self) -> Instant {
        self.next_poll.min(self.next_transition)
    }

    /// Report the deadlines reached at `now` and move them forward.
    pub fn take_due(&mut self, now: Instant) -> Due {
        let poll = now >= self.next_poll;
        if poll {
            self.next_poll = advance(self.next_poll, self.poll_period, now);
        }

        let transition = now >= self.next_transition;
        if transition {
            self.next_transition = advance(self.next_transition, self.transition_interval, now);
        }

        Due { poll, transition }
    }
}

/// Next deadline after `deadline`. Missed periods are skipped, not replayed.
fn advance(deadline: Instant, period: Duration, now: Instant) -> Instant {
    let next = deadline + period;
    if next > now {
        next
    } else {
        now + period
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
