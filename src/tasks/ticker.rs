//! Scoped registration of the repeating countdown tick

use std::{ops::ControlFlow, time::Duration};
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::debug;

/// A running tick task. Dropping it cancels the task.
///
/// Each registration carries the timer epoch it was acquired under; the
/// callback receives that epoch with every tick.
#[derive(Debug)]
pub struct Ticker {
    epoch: u64,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn a task calling `on_tick(epoch)` every `period`, first after one
    /// full period. The task ends when the callback breaks or the ticker is dropped.
    pub fn spawn<F>(epoch: u64, period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut(u64) -> ControlFlow<()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                if on_tick(epoch).is_break() {
                    break;
                }
            }
            debug!(epoch, "Tick task finished");
        });

        debug!(epoch, ?period, "Tick registration acquired");
        Self { epoch, handle }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
        debug!(epoch = self.epoch, "Tick registration released");
    }
}
