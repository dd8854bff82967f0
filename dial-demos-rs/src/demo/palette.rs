use dial::{palette, ColorEaser, Knob, Movement, Position, ToneSink};

use super::Demo;

/// How the indicator reaches a newly selected palette colour.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitionMode {
    /// Write the new colour immediately.
    #[default]
    Instant,
    /// Fade toward it on transition ticks.
    Smooth,
}

/// Selects one of 16 palette colours by position.
///
/// In [`TransitionMode::Smooth`] the movement only retargets the
/// [`ColorEaser`]; the indicator is written from
/// [`on_transition_tick`](Demo::on_transition_tick) until the fade settles.
#[derive(Debug, Clone, Copy)]
pub struct PaletteDemo {
    mode: TransitionMode,
    easer: ColorEaser,
}

impl PaletteDemo {
    pub fn new(mode: TransitionMode) -> Self {
        Self {
            mode,
            easer: ColorEaser::default(),
        }
    }

    /// Use a custom per-tick step for smooth transitions.
    pub fn with_step(mut self, step: u8) -> Self {
        self.easer = self.easer.with_step(step);
        self
    }

    pub fn mode(&self) -> TransitionMode {
        self.mode
    }

    pub fn easer(&self) -> &ColorEaser {
        &self.easer
    }
}

impl Default for PaletteDemo {
    fn default() -> Self {
        Self::new(TransitionMode::default())
    }
}

impl Demo for PaletteDemo {
    fn name(&self) -> &'static str {
        match self.mode {
            TransitionMode::Instant => "palette",
            TransitionMode::Smooth => "palette-smooth",
        }
    }

    fn on_start<K: Knob, S: ToneSink>(&mut self, baseline: Position, knob: &mut K, _sink: &mut S) {
        self.easer.set_target(palette::color(baseline));
        knob.set_color(self.easer.snap_to_target());
    }

    fn on_movement<K: Knob, S: ToneSink>(
        &mut self,
        movement: Movement,
        knob: &mut K,
        _sink: &mut S,
    ) {
        self.easer.set_target(palette::color(movement.current));

        #[cfg(feature = "defmt")]
        defmt::debug!("palette: position {} -> {}", movement.current, self.easer);

        if self.mode == TransitionMode::Instant {
            knob.set_color(self.easer.snap_to_target());
        }
    }

    fn on_transition_tick<K: Knob>(&mut self, knob: &mut K) {
        if self.mode != TransitionMode::Smooth {
            return;
        }
        if let Some(color) = self.easer.step() {
            knob.set_color(color);
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
