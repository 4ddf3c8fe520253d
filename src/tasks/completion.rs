//! Host-side listener for timer notifications

use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use crate::state::{AppState, TimerEvent};

/// Background task that reports completed runs and duration changes
pub async fn timer_events_task(state: Arc<AppState>) {
    info!("Starting timer event listener");

    let mut events = state.subscribe_events();
    drop(state);

    loop {
        match events.recv().await {
            Ok(TimerEvent::Completed { duration_seconds }) => {
                info!("Countdown of {}s completed", duration_seconds);
            }
            Ok(TimerEvent::DurationChanged { seconds }) => {
                info!("Timer duration changed to {}s", seconds);
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Timer event listener lagged, {} events skipped", skipped);
            }
            Err(RecvError::Closed) => {
                info!("Timer event channel closed, stopping listener");
                break;
            }
        }
    }
}
