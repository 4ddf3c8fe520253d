//! Rendering of the timer widget and the page shell around it
//!
//! Everything here is a pure function of timer state and location.

pub mod controls;
pub mod display;
pub mod navigation;
pub mod page;

use serde::{Deserialize, Serialize};

use crate::state::{CountdownTimer, RunState, TimerBounds};

pub use controls::{Controls, PauseLabel};
pub use display::{DigitGroup, TimeDisplay, DIGIT_MOTION};
pub use navigation::{menu, NavEntry, NavigationItem, NAV_ITEMS};
pub use page::render_page;

/// Everything a host needs to draw one frame of the timer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerView {
    pub state: RunState,
    pub remaining_seconds: u64,
    pub requested_seconds: u64,
    pub finished: bool,
    pub bounds: TimerBounds,
    pub display: TimeDisplay,
    pub groups: [DigitGroup; 3],
    pub controls: Controls,
}

impl TimerView {
    /// Build a frame, marking digit groups that differ from `previous`
    pub fn new(timer: &CountdownTimer, previous: Option<&TimeDisplay>) -> Self {
        let display = TimeDisplay::from_seconds(timer.remaining());
        let groups = display.groups(previous);
        Self {
            state: timer.run_state(),
            remaining_seconds: timer.remaining(),
            requested_seconds: timer.requested(),
            finished: timer.is_finished(),
            bounds: timer.bounds(),
            display,
            groups,
            controls: Controls::for_timer(timer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_reflects_timer() {
        let mut timer = CountdownTimer::new(3661.0, TimerBounds::default());
        let first = TimerView::new(&timer, None);
        assert_eq!(first.display.hours, "01");
        assert_eq!(first.state, RunState::Idle);

        timer.start();
        timer.tick();
        let second = TimerView::new(&timer, Some(&first.display));
        assert_eq!(second.remaining_seconds, 3660);
        assert_eq!(second.groups[2].exiting.as_deref(), Some("01"));
        assert!(!second.groups[0].changed());
        assert!(second.controls.pause_resume);
    }

    #[test]
    fn view_serializes_state_lowercase() {
        let view = TimerView::new(&CountdownTimer::default(), None);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["state"], "idle");
        assert_eq!(json["display"]["minutes"], "30");
        assert_eq!(json["controls"]["pause_label"], "Pause");
    }
}
