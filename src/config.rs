//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

use crate::state::{TimerBounds, MAX_TIME, MIN_TIME, STEP};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "keiri")]
#[command(about = "A countdown timer widget and navigation shell served as a small web page")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Requested countdown duration in seconds (rounded and clamped into bounds)
    #[arg(short, long, default_value_t = MIN_TIME as f64, allow_negative_numbers = true)]
    pub seconds: f64,

    /// Shortest allowed duration in seconds
    #[arg(long, default_value_t = MIN_TIME)]
    pub min_time: u64,

    /// Longest allowed duration in seconds
    #[arg(long, default_value_t = MAX_TIME)]
    pub max_time: u64,

    /// Increment/decrement step in seconds
    #[arg(long, default_value_t = STEP)]
    pub step: u64,

    /// Tick interval in milliseconds
    #[arg(long, default_value = "1000")]
    pub tick_millis: u64,

    /// Start counting down as soon as the server is up
    #[arg(long)]
    pub autostart: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Validated duration bounds
    pub fn bounds(&self) -> Result<TimerBounds, String> {
        TimerBounds::new(self.min_time, self.max_time, self.step)
    }

    /// Interval between ticks
    pub fn tick_period(&self) -> Result<Duration, String> {
        if self.tick_millis == 0 {
            return Err("Tick interval must be at least 1 millisecond".to_string());
        }
        Ok(Duration::from_millis(self.tick_millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["keiri"]).unwrap();
        assert_eq!(config.address(), "127.0.0.1:20554");
        assert_eq!(config.bounds().unwrap(), TimerBounds::default());
        assert_eq!(config.tick_period().unwrap(), Duration::from_secs(1));
        assert_eq!(config.seconds, 1800.0);
        assert_eq!(config.log_level(), "info");
        assert!(!config.autostart);
    }

    #[test]
    fn custom_bounds_and_duration() {
        let config = Config::try_parse_from([
            "keiri", "--seconds", "3600.6", "--min-time", "60", "--max-time", "7200", "--step", "60",
            "--autostart", "-v",
        ])
        .unwrap();
        assert_eq!(config.bounds().unwrap().clamp(config.seconds), 3601);
        assert!(config.autostart);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn invalid_settings_are_reported() {
        let config =
            Config::try_parse_from(["keiri", "--min-time", "900", "--max-time", "600"]).unwrap();
        assert!(config.bounds().is_err());

        let config = Config::try_parse_from(["keiri", "--tick-millis", "0"]).unwrap();
        assert!(config.tick_period().is_err());
    }
}
