//! Digit projection of a remaining duration

use serde::{Deserialize, Serialize};

/// Remaining time split into zero-padded digit groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeDisplay {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

impl TimeDisplay {
    /// Project whole seconds onto hours, minutes and seconds
    pub fn from_seconds(remaining: u64) -> Self {
        Self {
            hours: format!("{:02}", remaining / 3600),
            minutes: format!("{:02}", (remaining % 3600) / 60),
            seconds: format!("{:02}", remaining % 60),
        }
    }

    /// Digit groups in display order, each marked with the value it replaced
    pub fn groups(&self, previous: Option<&TimeDisplay>) -> [DigitGroup; 3] {
        [
            DigitGroup::new("Hours", &self.hours, previous.map(|d| &d.hours)),
            DigitGroup::new("Minutes", &self.minutes, previous.map(|d| &d.minutes)),
            DigitGroup::new("Seconds", &self.seconds, previous.map(|d| &d.seconds)),
        ]
    }
}

/// One rendered digit group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitGroup {
    pub label: String,
    pub value: String,
    /// Value leaving the slot when this group changed since the last frame
    pub exiting: Option<String>,
}

impl DigitGroup {
    fn new(label: &str, value: &str, previous: Option<&String>) -> Self {
        let exiting = previous.filter(|old| old.as_str() != value).cloned();
        Self {
            label: label.to_string(),
            value: value.to_string(),
            exiting,
        }
    }

    pub fn changed(&self) -> bool {
        self.exiting.is_some()
    }
}

/// Spring used for digit transitions. New values rise in from below while
/// the old one leaves upward; both fade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DigitMotion {
    pub offset_px: f32,
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub duration_secs: f32,
}

pub const DIGIT_MOTION: DigitMotion = DigitMotion {
    offset_px: 20.0,
    stiffness: 150.0,
    damping: 20.0,
    mass: 0.9,
    duration_secs: 0.5,
};
