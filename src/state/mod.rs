//! State management module
//!
//! This module contains the countdown timer state machine and the
//! application state hosting it.

pub mod app_state;
pub mod timer_state;

// Re-export main types
pub use app_state::{ActionReport, AppState};
pub use timer_state::{
    CountdownTimer, Outcome, RunState, TimerAction, TimerBounds, TimerEvent, MAX_TIME, MIN_TIME,
    STEP,
};
