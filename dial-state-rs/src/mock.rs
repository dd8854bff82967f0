//! Recording fakes of the collaborator traits.
//!
//! Available in this crate's tests and, through the `mock` feature, to
//! downstream crates. Commands are kept in fixed-capacity `heapless`
//! buffers; once a buffer is full further entries are dropped.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use heapless::Vec;

use crate::collaborator::{Brightness, ConfigSection, Knob, ToneSink};
use crate::direction::Direction;
use crate::position::Position;
use crate::tone::Tone;

/// Maximum number of write commands a [`MockKnob`] records.
pub const COMMAND_CAPACITY: usize = 128;

/// Maximum number of tones a [`MockToneSink`] records.
pub const TONE_CAPACITY: usize = 64;

/// A write issued to the knob unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnobCommand {
    SetDirectionMode(Direction),
    SetColor(Rgb888),
    SetBrightness(Brightness),
    SetDisplayEnabled(bool),
    SaveConfig(ConfigSection),
}

/// Error returned by [`MockKnob::begin`] when built with
/// [`MockKnob::unreachable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unreachable;

/// In-memory knob unit.
///
/// Tracks the settings written to it, records every write as a
/// [`KnobCommand`], and reports whatever position the test set. Physical
/// turns go through [`turn`](Self::turn), which honours the direction mode
/// the way the hardware counter does.
pub struct MockKnob {
    position: Position,
    direction_mode: Direction,
    color: Rgb888,
    brightness: Brightness,
    display_enabled: bool,
    reachable: bool,
    begun: bool,
    reads: usize,
    commands: Vec<KnobCommand, COMMAND_CAPACITY>,
}

impl MockKnob {
    /// A reachable knob resting at `position`.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            direction_mode: Direction::Clockwise,
            color: Rgb888::BLACK,
            brightness: Brightness::FULL,
            display_enabled: false,
            reachable: true,
            begun: false,
            reads: 0,
            commands: Vec::new(),
        }
    }

    /// A knob whose [`begin`](Knob::begin) always fails.
    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            ..Self::new(Position::MIN)
        }
    }

    /// Set the reading returned by the next [`value`](Knob::value).
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Turn the knob by `detents` (positive = physically clockwise).
    ///
    /// In counter-clockwise mode the counter runs the other way. The
    /// counter wraps modulo 16.
    pub fn turn(&mut self, detents: i8) {
        let signed = match self.direction_mode {
            Direction::Clockwise => detents,
            Direction::CounterClockwise => detents.wrapping_neg(),
        };
        let raw = self.position.get().wrapping_add(signed as u8);
        self.position = Position::from_bits(raw);
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn current_direction_mode(&self) -> Direction {
        self.direction_mode
    }

    pub fn current_color(&self) -> Rgb888 {
        self.color
    }

    pub fn current_brightness(&self) -> Brightness {
        self.brightness
    }

    pub fn is_display_enabled(&self) -> bool {
        self.display_enabled
    }

    pub fn has_begun(&self) -> bool {
        self.begun
    }

    /// Number of [`value`](Knob::value) calls so far.
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Every write recorded since construction or the last
    /// [`clear_commands`](Self::clear_commands).
    pub fn commands(&self) -> &[KnobCommand] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    fn record(&mut self, command: KnobCommand) {
        let _ = self.commands.push(command);
    }
}

impl Default for MockKnob {
    fn default() -> Self {
        Self::new(Position::MIN)
    }
}

impl Knob for MockKnob {
    type Error = Unreachable;

    fn begin(&mut self) -> Result<(), Self::Error> {
        if !self.reachable {
            return Err(Unreachable);
        }
        self.begun = true;
        Ok(())
    }

    fn value(&mut self) -> Position {
        self.reads += 1;
        self.position
    }

    fn direction_mode(&mut self) -> Direction {
        self.direction_mode
    }

    fn set_direction_mode(&mut self, mode: Direction) {
        self.direction_mode = mode;
        self.record(KnobCommand::SetDirectionMode(mode));
    }

    fn color(&mut self) -> Rgb888 {
        self.color
    }

    fn set_color(&mut self, color: Rgb888) {
        self.color = color;
        self.record(KnobCommand::SetColor(color));
    }

    fn brightness(&mut self) -> Brightness {
        self.brightness
    }

    fn set_brightness(&mut self, brightness: Brightness) {
        self.brightness = brightness;
        self.record(KnobCommand::SetBrightness(brightness));
    }

    fn set_display_enabled(&mut self, enabled: bool) {
        self.display_enabled = enabled;
        self.record(KnobCommand::SetDisplayEnabled(enabled));
    }

    fn save_config(&mut self, section: ConfigSection) {
        self.record(KnobCommand::SaveConfig(section));
    }
}

/// Tone output that records what it was asked to play.
#[derive(Default)]
pub struct MockToneSink {
    tones: Vec<Tone, TONE_CAPACITY>,
}

impl MockToneSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tones(&self) -> &[Tone] {
        &self.tones
    }

    pub fn last(&self) -> Option<Tone> {
        self.tones.last().copied()
    }

    pub fn clear(&mut self) {
        self.tones.clear();
    }
}

impl ToneSink for MockToneSink {
    fn play_tone(&mut self, tone: Tone) {
        let _ = self.tones.push(tone);
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
