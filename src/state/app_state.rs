//! Main application state management
//!
//! `AppState` hosts the single timer widget: the state machine, its tick
//! registration and the channels notifying the page host.

use std::{
    ops::ControlFlow,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, watch};
use tracing::{debug, error, info, warn};

use super::{CountdownTimer, Outcome, TimerAction, TimerBounds, TimerEvent};
use crate::{tasks::Ticker, view::{TimeDisplay, TimerView}};

/// Timer plus everything scoped to it
#[derive(Debug)]
struct TimerWidget {
    timer: CountdownTimer,
    /// Present exactly while the timer is ticking
    ticker: Option<Ticker>,
    /// Display before the last applied change until a frame showing the
    /// transition has been rendered
    previous_display: Option<TimeDisplay>,
}

impl TimerWidget {
    fn view(&self) -> TimerView {
        TimerView::new(&self.timer, self.previous_display.as_ref())
    }

    /// Render a frame and retire its digit transitions
    fn take_view(&mut self) -> TimerView {
        let view = self.view();
        self.previous_display = None;
        view
    }
}

/// Result of driving the timer through one action
#[derive(Debug, Clone)]
pub struct ActionReport {
    pub applied: bool,
    pub view: TimerView,
}

/// Main application state owning the timer widget
#[derive(Debug)]
pub struct AppState {
    widget: Mutex<TimerWidget>,
    /// Interval between ticks (one second outside tests)
    pub tick_period: Duration,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Completion and duration-change notifications
    pub event_tx: broadcast::Sender<TimerEvent>,
    /// Latest rendered frame
    pub view_tx: watch::Sender<TimerView>,
    /// Keep the receiver alive to prevent channel closure
    pub _view_rx: watch::Receiver<TimerView>,
}

impl AppState {
    /// Create an idle timer for the requested duration
    pub fn new(
        port: u16,
        host: String,
        requested_seconds: f64,
        bounds: TimerBounds,
        tick_period: Duration,
    ) -> Self {
        let timer = CountdownTimer::new(requested_seconds, bounds);
        let widget = TimerWidget {
            timer,
            ticker: None,
            previous_display: None,
        };
        let (event_tx, _) = broadcast::channel(16);
        let (view_tx, view_rx) = watch::channel(widget.view());

        info!(
            "Timer configured for {}s (bounds {}s..={}s, step {}s)",
            widget.timer.requested(),
            bounds.min,
            bounds.max,
            bounds.step
        );

        Self {
            widget: Mutex::new(widget),
            tick_period,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            event_tx,
            view_tx,
            _view_rx: view_rx,
        }
    }

    /// Drive the timer through one action and publish the new frame.
    ///
    /// Actions outside their enabled window are reported as not applied.
    pub fn apply(self: &Arc<Self>, action: TimerAction) -> Result<ActionReport, String> {
        let mut widget = self.widget.lock()
            .map_err(|e| format!("Failed to lock timer: {}", e))?;

        let before = TimeDisplay::from_seconds(widget.timer.remaining());
        let outcome = widget.timer.apply(action);
        if outcome.applied {
            info!("Timer action '{}' applied", action.name());
            widget.previous_display = Some(before);
            self.record_action(action.name());
        } else {
            debug!("Timer action '{}' ignored in state {:?}", action.name(), widget.timer.run_state());
        }

        let view = self.settle(&mut widget, outcome);
        Ok(ActionReport {
            applied: outcome.applied,
            view,
        })
    }

    pub fn increment(self: &Arc<Self>) -> Result<ActionReport, String> {
        self.apply(TimerAction::Increment)
    }

    pub fn decrement(self: &Arc<Self>) -> Result<ActionReport, String> {
        self.apply(TimerAction::Decrement)
    }

    pub fn start(self: &Arc<Self>) -> Result<ActionReport, String> {
        self.apply(TimerAction::Start)
    }

    pub fn pause(self: &Arc<Self>) -> Result<ActionReport, String> {
        self.apply(TimerAction::Pause)
    }

    pub fn resume(self: &Arc<Self>) -> Result<ActionReport, String> {
        self.apply(TimerAction::Resume)
    }

    pub fn reset(self: &Arc<Self>) -> Result<ActionReport, String> {
        self.apply(TimerAction::Reset)
    }

    /// Replace the requested duration, stopping any run
    pub fn reconfigure(self: &Arc<Self>, requested_seconds: f64) -> Result<ActionReport, String> {
        self.apply(TimerAction::Reconfigure(requested_seconds))
    }

    /// Apply a tick delivered by the registration acquired under `epoch`
    fn tick(self: &Arc<Self>, epoch: u64) -> ControlFlow<()> {
        let mut widget = match self.widget.lock() {
            Ok(widget) => widget,
            Err(e) => {
                error!("Failed to lock timer for tick: {}", e);
                return ControlFlow::Break(());
            }
        };

        let before = TimeDisplay::from_seconds(widget.timer.remaining());
        let outcome = widget.timer.tick_for(epoch);
        if !outcome.applied {
            debug!(epoch, "Discarding stale tick");
            return ControlFlow::Break(());
        }
        widget.previous_display = Some(before);
        debug!(epoch, remaining = widget.timer.remaining(), "Tick");

        self.settle(&mut widget, outcome);
        if widget.timer.is_ticking() {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    }

    /// Align the tick registration with the timer and notify watchers
    fn settle(self: &Arc<Self>, widget: &mut TimerWidget, outcome: Outcome) -> TimerView {
        self.sync_ticker(widget);

        let view = widget.view();
        if outcome.applied {
            if let Err(e) = self.view_tx.send(view.clone()) {
                warn!("Failed to send timer view update: {}", e);
            }
        }
        if let Some(event) = outcome.event {
            if let TimerEvent::Completed { duration_seconds } = event {
                info!("Countdown finished after {}s", duration_seconds);
            }
            if self.event_tx.send(event).is_err() {
                debug!("No listeners for timer event {:?}", event);
            }
        }
        view
    }

    /// Acquire a registration for the current epoch while ticking; release it otherwise
    fn sync_ticker(self: &Arc<Self>, widget: &mut TimerWidget) {
        if !widget.timer.is_ticking() {
            widget.ticker = None;
            return;
        }

        let epoch = widget.timer.epoch();
        if widget.ticker.as_ref().is_some_and(|ticker| ticker.epoch() == epoch) {
            return;
        }

        let state = Arc::downgrade(self);
        widget.ticker = Some(Ticker::spawn(epoch, self.tick_period, move |epoch| {
            match state.upgrade() {
                Some(state) => state.tick(epoch),
                None => ControlFlow::Break(()),
            }
        }));
    }

    /// Release the tick registration without touching the timer value
    pub fn shutdown(&self) -> Result<(), String> {
        let mut widget = self.widget.lock()
            .map_err(|e| format!("Failed to lock timer: {}", e))?;
        if widget.ticker.take().is_some() {
            info!("Tick registration released on shutdown");
        }
        Ok(())
    }

    /// Whether a tick task is currently registered
    pub fn is_tick_registered(&self) -> Result<bool, String> {
        self.widget.lock()
            .map(|widget| widget.ticker.is_some())
            .map_err(|e| format!("Failed to lock timer: {}", e))
    }

    /// Render the current frame.
    ///
    /// Digit transitions of the last change are shown to the first reader
    /// only; later frames without a new change show none.
    pub fn get_timer_view(&self) -> Result<TimerView, String> {
        self.widget.lock()
            .map(|mut widget| widget.take_view())
            .map_err(|e| format!("Failed to lock timer: {}", e))
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<TimerEvent> {
        self.event_tx.subscribe()
    }

    pub fn subscribe_view(&self) -> watch::Receiver<TimerView> {
        self.view_tx.subscribe()
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
