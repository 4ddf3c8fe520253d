//! Enabled/disabled policy for the timer's control affordances

use serde::{Deserialize, Serialize};

use crate::state::CountdownTimer;

/// Which controls a timer currently accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub increment: bool,
    pub decrement: bool,
    pub start: bool,
    pub pause_resume: bool,
    pub reset: bool,
    /// Label of the pause/resume affordance
    pub pause_label: PauseLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PauseLabel {
    Pause,
    Resume,
}

impl PauseLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PauseLabel::Pause => "Pause",
            PauseLabel::Resume => "Resume",
        }
    }
}

impl Controls {
    pub fn for_timer(timer: &CountdownTimer) -> Self {
        Self {
            increment: timer.can_increment(),
            decrement: timer.can_decrement(),
            start: timer.can_start(),
            pause_resume: timer.can_toggle_pause(),
            reset: true,
            pause_label: if timer.is_paused() {
                PauseLabel::Resume
            } else {
                PauseLabel::Pause
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TimerBounds;

    #[test]
    fn idle_timer_in_range() {
        let timer = CountdownTimer::new(3600.0, TimerBounds::default());
        let controls = Controls::for_timer(&timer);
        assert!(controls.increment && controls.decrement && controls.start && controls.reset);
        assert!(!controls.pause_resume);
    }

    #[test]
    fn bounds_disable_adjustment() {
        let at_max = CountdownTimer::new(10800.0, TimerBounds::default());
        assert!(!Controls::for_timer(&at_max).increment);
        assert!(Controls::for_timer(&at_max).decrement);

        let at_min = CountdownTimer::new(1800.0, TimerBounds::default());
        assert!(Controls::for_timer(&at_min).increment);
        assert!(!Controls::for_timer(&at_min).decrement);
    }

    #[test]
    fn running_timer_only_pauses_and_resets() {
        let mut timer = CountdownTimer::new(3600.0, TimerBounds::default());
        timer.start();
        let controls = Controls::for_timer(&timer);
        assert!(!controls.increment && !controls.decrement && !controls.start);
        assert!(controls.pause_resume && controls.reset);
        assert_eq!(controls.pause_label, PauseLabel::Pause);

        timer.pause();
        assert_eq!(Controls::for_timer(&timer).pause_label, PauseLabel::Resume);
    }
}
