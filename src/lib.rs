//! Keiri - a countdown timer widget inside a navigation page shell
//!
//! The countdown state machine lives in [`state`], its rendering and the
//! sidebar in [`view`], the scoped tick task in [`tasks`], and the HTTP host
//! serving the page in [`api`].

pub mod api;
pub mod config;
pub mod state;
pub mod tasks;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use state::{AppState, CountdownTimer, TimerBounds};
pub use utils::signals::shutdown_signal;
