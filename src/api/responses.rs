//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::view::{NavEntry, TimerView};

/// Response for timer control endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerView,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, timer: TimerView) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            timer,
        }
    }

    /// The action changed the timer
    pub fn applied(message: String, timer: TimerView) -> Self {
        Self::new("applied".to_string(), message, timer)
    }

    /// The action was outside its enabled window and did nothing
    pub fn ignored(message: String, timer: TimerView) -> Self {
        Self::new("ignored".to_string(), message, timer)
    }
}

/// Body of PUT /timer/duration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationRequest {
    pub seconds: f64,
}

/// Query of GET /navigation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationQuery {
    #[serde(default = "root_location")]
    pub location: String,
}

fn root_location() -> String {
    "/".to_string()
}

/// Navigation entries for a location
#[derive(Debug, Clone, Serialize)]
pub struct NavigationResponse {
    pub location: String,
    pub items: Vec<NavEntry>,
}

/// Status response with timer information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerView,
    pub tick_registered: bool,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
