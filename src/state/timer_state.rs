//! Countdown timer state machine
//!
//! `CountdownTimer` owns the remaining time, the run state and the duration
//! bounds. It knows nothing about clocks or tasks: ticks are fed in by the
//! caller, and every transition that acquires or releases the tick
//! registration bumps the timer's epoch so stale ticks can be recognised.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Shortest duration a timer can be configured for (30 minutes)
pub const MIN_TIME: u64 = 1800;
/// Longest duration a timer can be configured for (3 hours)
pub const MAX_TIME: u64 = 10800;
/// Increment/decrement step (10 minutes)
pub const STEP: u64 = 600;

/// Duration limits and adjustment step for a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerBounds {
    pub min: u64,
    pub max: u64,
    pub step: u64,
}

impl TimerBounds {
    /// Build validated bounds
    pub fn new(min: u64, max: u64, step: u64) -> Result<Self, String> {
        if min == 0 {
            return Err("Minimum duration must be at least 1 second".to_string());
        }
        if min > max {
            return Err(format!(
                "Minimum duration ({}s) exceeds maximum duration ({}s)",
                min, max
            ));
        }
        if step == 0 {
            return Err("Adjustment step must be at least 1 second".to_string());
        }
        Ok(Self { min, max, step })
    }

    /// Round a requested duration to whole seconds and clamp it into range.
    ///
    /// Out-of-range input is never rejected. NaN falls back to the minimum.
    pub fn clamp(&self, requested: f64) -> u64 {
        if requested.is_nan() {
            return self.min;
        }
        let rounded = requested.round();
        if rounded <= self.min as f64 {
            self.min
        } else if rounded >= self.max as f64 {
            self.max
        } else {
            rounded as u64
        }
    }
}

impl Default for TimerBounds {
    fn default() -> Self {
        Self {
            min: MIN_TIME,
            max: MAX_TIME,
            step: STEP,
        }
    }
}

/// Whether the countdown is consuming ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Idle,
    Running,
    Paused,
}

/// Notifications a timer emits towards its host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TimerEvent {
    /// A run counted down to zero
    Completed { duration_seconds: u64 },
    /// The target duration was adjusted with increment/decrement
    DurationChanged { seconds: u64 },
}

/// What an operation did to the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub applied: bool,
    pub event: Option<TimerEvent>,
}

impl Outcome {
    pub fn applied() -> Self {
        Self {
            applied: true,
            event: None,
        }
    }

    pub fn ignored() -> Self {
        Self {
            applied: false,
            event: None,
        }
    }

    fn notify(event: TimerEvent) -> Self {
        Self {
            applied: true,
            event: Some(event),
        }
    }
}

/// Mutation entry points, as named by hosts driving the timer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerAction {
    Increment,
    Decrement,
    Start,
    Pause,
    Resume,
    TogglePause,
    Reset,
    Reconfigure(f64),
}

impl TimerAction {
    pub fn name(&self) -> &'static str {
        match self {
            TimerAction::Increment => "increment",
            TimerAction::Decrement => "decrement",
            TimerAction::Start => "start",
            TimerAction::Pause => "pause",
            TimerAction::Resume => "resume",
            TimerAction::TogglePause => "toggle",
            TimerAction::Reset => "reset",
            TimerAction::Reconfigure(_) => "reconfigure",
        }
    }
}

impl FromStr for TimerAction {
    type Err = String;

    /// Parse a control name. Reconfiguration carries a value and has no name form.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "increment" => Ok(TimerAction::Increment),
            "decrement" => Ok(TimerAction::Decrement),
            "start" => Ok(TimerAction::Start),
            "pause" => Ok(TimerAction::Pause),
            "resume" => Ok(TimerAction::Resume),
            "toggle" => Ok(TimerAction::TogglePause),
            "reset" => Ok(TimerAction::Reset),
            other => Err(format!("Unknown timer action: {}", other)),
        }
    }
}

/// Countdown timer with adjustable duration
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    bounds: TimerBounds,
    requested: u64,
    remaining: u64,
    run: RunState,
    epoch: u64,
}

impl CountdownTimer {
    /// Create an idle timer for the requested duration (clamped)
    pub fn new(requested: f64, bounds: TimerBounds) -> Self {
        let duration = bounds.clamp(requested);
        Self {
            bounds,
            requested: duration,
            remaining: duration,
            run: RunState::Idle,
            epoch: 0,
        }
    }

    pub fn bounds(&self) -> TimerBounds {
        self.bounds
    }

    /// Duration a reset returns to
    pub fn requested(&self) -> u64 {
        self.requested
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn run_state(&self) -> RunState {
        self.run
    }

    /// Generation of the current tick registration
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// True while a run is in progress, paused or not
    pub fn is_running(&self) -> bool {
        self.run != RunState::Idle
    }

    pub fn is_paused(&self) -> bool {
        self.run == RunState::Paused
    }

    /// True while ticks should be delivered
    pub fn is_ticking(&self) -> bool {
        self.run == RunState::Running
    }

    /// True once a run has counted down to zero and nothing reset it yet
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    pub fn can_increment(&self) -> bool {
        !self.is_running() && self.remaining < self.bounds.max
    }

    pub fn can_decrement(&self) -> bool {
        !self.is_running() && self.remaining > self.bounds.min
    }

    pub fn can_start(&self) -> bool {
        !self.is_running() && self.remaining > 0
    }

    pub fn can_toggle_pause(&self) -> bool {
        self.is_running()
    }

    /// Add one step to the duration, capped at the maximum
    pub fn increment(&mut self) -> Outcome {
        if !self.can_increment() {
            return Outcome::ignored();
        }
        let next = self
            .remaining
            .saturating_add(self.bounds.step)
            .clamp(self.bounds.min, self.bounds.max);
        self.set_duration(next)
    }

    /// Remove one step from the duration, floored at the minimum
    pub fn decrement(&mut self) -> Outcome {
        if !self.can_decrement() {
            return Outcome::ignored();
        }
        let next = self
            .remaining
            .saturating_sub(self.bounds.step)
            .clamp(self.bounds.min, self.bounds.max);
        self.set_duration(next)
    }

    fn set_duration(&mut self, seconds: u64) -> Outcome {
        self.remaining = seconds;
        self.requested = seconds;
        Outcome::notify(TimerEvent::DurationChanged { seconds })
    }

    /// Begin a run from the current remaining time.
    ///
    /// A finished timer (remaining 0) does not restart on its own; it has
    /// to be reset or reconfigured first.
    pub fn start(&mut self) -> Outcome {
        if !self.can_start() {
            return Outcome::ignored();
        }
        self.enter(RunState::Running);
        Outcome::applied()
    }

    pub fn pause(&mut self) -> Outcome {
        if self.run != RunState::Running {
            return Outcome::ignored();
        }
        self.enter(RunState::Paused);
        Outcome::applied()
    }

    pub fn resume(&mut self) -> Outcome {
        if self.run != RunState::Paused {
            return Outcome::ignored();
        }
        self.enter(RunState::Running);
        Outcome::applied()
    }

    /// Pause a running timer or resume a paused one
    pub fn toggle_pause(&mut self) -> Outcome {
        match self.run {
            RunState::Running => self.pause(),
            RunState::Paused => self.resume(),
            RunState::Idle => Outcome::ignored(),
        }
    }

    /// Restore the requested duration and stop any run. Always applies.
    pub fn reset(&mut self) -> Outcome {
        self.remaining = self.requested;
        self.enter(RunState::Idle);
        Outcome::applied()
    }

    /// Replace the requested duration; stops any run.
    pub fn reconfigure(&mut self, requested: f64) -> Outcome {
        self.requested = self.bounds.clamp(requested);
        self.reset()
    }

    /// Dispatch a named action
    pub fn apply(&mut self, action: TimerAction) -> Outcome {
        match action {
            TimerAction::Increment => self.increment(),
            TimerAction::Decrement => self.decrement(),
            TimerAction::Start => self.start(),
            TimerAction::Pause => self.pause(),
            TimerAction::Resume => self.resume(),
            TimerAction::TogglePause => self.toggle_pause(),
            TimerAction::Reset => self.reset(),
            TimerAction::Reconfigure(seconds) => self.reconfigure(seconds),
        }
    }

    /// Consume one second of a running countdown
    pub fn tick(&mut self) -> Outcome {
        if self.run != RunState::Running || self.remaining == 0 {
            return Outcome::ignored();
        }
        self.remaining -= 1;
        if self.remaining > 0 {
            return Outcome::applied();
        }
        self.enter(RunState::Idle);
        Outcome::notify(TimerEvent::Completed {
            duration_seconds: self.requested,
        })
    }

    /// Consume a tick scheduled under `epoch`; stale ticks are dropped
    pub fn tick_for(&mut self, epoch: u64) -> Outcome {
        if epoch != self.epoch {
            return Outcome::ignored();
        }
        self.tick()
    }

    fn enter(&mut self, run: RunState) {
        self.run = run;
        self.epoch += 1;
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new(MIN_TIME as f64, TimerBounds::default())
    }
}
