//! Background tasks module
//!
//! This module contains the tick task driving the countdown and the
//! listener reporting timer notifications.

pub mod completion;
pub mod ticker;

// Re-export main items
pub use completion::timer_events_task;
pub use ticker::Ticker;
