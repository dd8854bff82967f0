//! One running knob instance: collaborators, demo and tracker state.

use dial::{ConfigSection, Knob, Movement, Position, PositionTracker, StartError, ToneSink};

use crate::config::SessionConfig;
use crate::demo::Demo;

/// Owns everything one running knob instance needs.
///
/// There is no process-wide state: the last reading, the demo's own state
/// and the collaborators all live here and are passed into each tick.
///
/// # Lifecycle
///
/// 1. [`Session::new()`] — stores the parts; no collaborator calls.
/// 2. [`Session::begin()`] — connects, applies the startup settings and
///    reads the baseline position.
/// 3. [`Session::poll()`] once per poll period and
///    [`Session::transition_tick()`] once per transition interval.
///
/// # Example
///
/// ```ignore
/// let mut session = Session::new(knob, buzzer, DigitDemo::new(), SessionConfig::default());
/// session.begin()?;
/// loop {
///     session.poll();
///     Timer::after_millis(50).await;
/// }
/// ```
pub struct Session<K, S, D> {
    knob: K,
    sink: S,
    demo: D,
    tracker: PositionTracker,
    config: SessionConfig,
    started: bool,
}

impl<K, S, D> Session<K, S, D>
where
    K: Knob,
    S: ToneSink,
    D: Demo,
{
    pub fn new(knob: K, sink: S, demo: D, config: SessionConfig) -> Self {
        Self {
            knob,
            sink,
            demo,
            tracker: PositionTracker::default(),
            config,
            started: false,
        }
    }

    /// Connect to the knob unit and prepare for polling.
    ///
    /// On success the startup settings from [`SessionConfig`] have been
    /// written (and persisted if `persist_on_start` is set), the tracker is
    /// seeded with the first reading, and the demo has seen `on_start`.
    /// Returns that first reading.
    ///
    /// # Errors
    ///
    /// [`StartError::Unreachable`] if `begin()` fails. Nothing else has been
    /// written to the knob in that case and the session stays unstarted.
    pub fn begin(&mut self) -> Result<Position, StartError<K::Error>> {
        self.knob.begin()?;

        self.knob.set_direction_mode(self.config.start_direction);
        self.knob.set_brightness(self.config.start_brightness);
        self.knob.set_display_enabled(self.config.display_enabled);
        if self.config.persist_on_start {
            self.knob.save_config(ConfigSection::All);
        }

        let baseline = self.knob.value();
        self.tracker.reset(baseline);
        self.demo.on_start(baseline, &mut self.knob, &mut self.sink);
        self.started = true;

        #[cfg(feature = "defmt")]
        defmt::info!("{} demo started at position {}", self.demo.name(), baseline);

        Ok(baseline)
    }

    /// One poll tick: read the position and hand any movement to the demo.
    ///
    /// Returns `None` when the reading did not change, or if
    /// [`begin()`](Self::begin) has not succeeded yet (no read is made).
    pub fn poll(&mut self) -> Option<Movement> {
        if !self.started {
            return None;
        }

        let current = self.knob.value();
        let movement = self.tracker.observe(current)?;

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "position {} -> {} ({})",
            movement.previous,
            movement.current,
            movement.direction
        );

        self.demo.on_movement(movement, &mut self.knob, &mut self.sink);
        Some(movement)
    }

    /// One transition tick. No-op before [`begin()`](Self::begin).
    pub fn transition_tick(&mut self) {
        if self.started {
            self.demo.on_transition_tick(&mut self.knob);
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Last position seen by the tracker.
    pub fn last_position(&self) -> Position {
        self.tracker.last()
    }

    pub fn knob(&self) -> &K {
        &self.knob
    }

    pub fn knob_mut(&mut self) -> &mut K {
        &mut self.knob
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn demo(&self) -> &D {
        &self.demo
    }

    /// Take the session apart.
    pub fn into_parts(self) -> (K, S, D) {
        (self.knob, self.sink, self.demo)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
