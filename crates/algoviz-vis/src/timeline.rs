//! Playback cursor over a step log.

use std::num::NonZeroU64;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::interpret::{Interpreter, View};

/// Interval between automatic steps. Always at least one millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Speed(NonZeroU64);

impl Speed {
    /// Interval of `ms` milliseconds; zero is rejected.
    pub fn from_millis(ms: u64) -> Result<Self> {
        NonZeroU64::new(ms).map(Speed).ok_or(Error::InvalidSpeed(ms))
    }

    /// Interval of `ms` milliseconds, with zero raised to one.
    pub const fn saturating_from_millis(ms: u64) -> Self {
        match NonZeroU64::new(ms) {
            Some(ms) => Speed(ms),
            None => Speed(NonZeroU64::MIN),
        }
    }

    pub fn as_millis(self) -> u64 {
        self.0.get()
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0.get())
    }
}

/// Where the cursor stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    /// At the start, not playing
    Idle,
    /// Advancing on every tick
    Playing,
    /// Stopped part-way
    Paused,
    /// Every step has been applied
    Complete,
}

/// Step log, cursor and the view at the cursor.
///
/// The view always equals `interpreter.replay(&steps[..index])`: stepping
/// forward applies one step incrementally, everything else replays.
#[derive(Debug, Clone)]
pub struct Timeline<I: Interpreter> {
    interpreter: I,
    steps: Vec<I::Step>,
    index: usize,
    state: PlaybackState,
    speed: Speed,
    view: I::View,
}

impl<I: Interpreter> Timeline<I> {
    pub fn new(interpreter: I, steps: Vec<I::Step>, speed: Speed) -> Self {
        let view = interpreter.initial();
        let state = if steps.is_empty() {
            PlaybackState::Complete
        } else {
            PlaybackState::Idle
        };
        Self {
            interpreter,
            steps,
            index: 0,
            state,
            speed,
            view,
        }
    }

    pub fn interpreter(&self) -> &I {
        &self.interpreter
    }

    pub fn steps(&self) -> &[I::Step] {
        &self.steps
    }

    /// Number of steps applied so far.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn is_complete(&self) -> bool {
        self.state == PlaybackState::Complete
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn view(&self) -> &I::View {
        &self.view
    }

    /// Most recently applied step.
    pub fn last_step(&self) -> Option<&I::Step> {
        self.index.checked_sub(1).and_then(|i| self.steps.get(i))
    }

    /// Start or resume. Does nothing once complete.
    pub fn play(&mut self) {
        if matches!(self.state, PlaybackState::Idle | PlaybackState::Paused) {
            self.state = PlaybackState::Playing;
        }
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Apply exactly one step. Returns the step, or `None` when already
    /// complete. Reaching the end stops playback.
    pub fn step(&mut self) -> Option<&I::Step> {
        if self.state == PlaybackState::Complete {
            return None;
        }
        let step = self.steps.get(self.index)?;

        self.view = self.interpreter.apply(self.view.clone(), step);
        self.index += 1;

        if self.index == self.steps.len() {
            self.state = PlaybackState::Complete;
        } else if self.state == PlaybackState::Idle {
            self.state = PlaybackState::Paused;
        }
        tracing::trace!(index = self.index, total = self.steps.len(), ?step, "applied step");
        Some(step)
    }

    /// Back to the start with the initial view.
    pub fn rewind(&mut self) {
        self.index = 0;
        self.view = self.interpreter.initial();
        self.state = if self.steps.is_empty() {
            PlaybackState::Complete
        } else {
            PlaybackState::Idle
        };
    }

    /// Jump to `index` (clamped to the log length) by full replay.
    pub fn seek(&mut self, index: usize) {
        let index = index.min(self.steps.len());
        self.view = self.interpreter.replay(&self.steps[..index]);
        self.index = index;

        self.state = if index == self.steps.len() {
            PlaybackState::Complete
        } else if self.state == PlaybackState::Playing {
            PlaybackState::Playing
        } else if index == 0 {
            PlaybackState::Idle
        } else {
            PlaybackState::Paused
        };
    }

    /// Undo the last step and pause.
    pub fn step_back(&mut self) {
        if self.index > 0 {
            self.seek(self.index - 1);
            self.state = PlaybackState::Paused;
        }
    }

    /// Takes effect from the next scheduled tick.
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    /// Fraction of steps applied, 0.0 to 1.0.
    pub fn progress(&self) -> f64 {
        if self.steps.is_empty() {
            0.0
        } else {
            self.index as f64 / self.steps.len() as f64
        }
    }

    pub fn status(&self) -> PlaybackStatus {
        PlaybackStatus::from(self)
    }
}

/// Cursor summary handed to a presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackStatus {
    pub current_step: usize,
    pub total_steps: usize,
    pub state: PlaybackState,
    pub speed: Speed,
    pub progress: f64,
}

impl<I: Interpreter> From<&Timeline<I>> for PlaybackStatus {
    fn from(timeline: &Timeline<I>) -> Self {
        Self {
            current_step: timeline.index,
            total_steps: timeline.steps.len(),
            state: timeline.state,
            speed: timeline.speed,
            progress: timeline.progress(),
        }
    }
}

/// Family-independent playback controls, so a session can drive whichever
/// timeline it currently holds.
pub trait Controls: Send {
    fn play(&mut self);
    fn pause(&mut self);
    /// Returns whether a step was applied.
    fn step(&mut self) -> bool;
    fn step_back(&mut self);
    fn rewind(&mut self);
    fn seek(&mut self, index: usize);
    fn set_speed(&mut self, speed: Speed);
    fn status(&self) -> PlaybackStatus;
    fn current_view(&self) -> View;
}

impl<I> Controls for Timeline<I>
where
    I: Interpreter + Send,
    I::Step: Send,
    I::View: Into<View> + Send,
{
    fn play(&mut self) {
        Timeline::play(self)
    }

    fn pause(&mut self) {
        Timeline::pause(self)
    }

    fn step(&mut self) -> bool {
        Timeline::step(self).is_some()
    }

    fn step_back(&mut self) {
        Timeline::step_back(self)
    }

    fn rewind(&mut self) {
        Timeline::rewind(self)
    }

    fn seek(&mut self, index: usize) {
        Timeline::seek(self, index)
    }

    fn set_speed(&mut self, speed: Speed) {
        Timeline::set_speed(self, speed)
    }

    fn status(&self) -> PlaybackStatus {
        Timeline::status(self)
    }

    fn current_view(&self) -> View {
        self.view.clone().into()
    }
}
