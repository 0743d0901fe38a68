//! Engine settings loaded from the environment.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::infrastructure::clock::{FixedClock, SystemClock};
use crate::infrastructure::ports::ClockPort;

const DEFAULT_LOG_FILTER: &str = "kilmere_engine=info";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineSettings {
    /// Freeze the calendar at this year instead of reading the system clock
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of_year: Option<i32>,

    /// Filter directive used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            as_of_year: None,
            log_filter: default_log_filter(),
        }
    }
}

impl EngineSettings {
    /// Load from environment variables, using defaults for missing values
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            as_of_year: std::env::var("KILMERE_AS_OF_YEAR")
                .ok()
                .and_then(|v| v.trim().parse().ok()),
            log_filter: env_or("KILMERE_LOG_FILTER", defaults.log_filter),
        }
    }

    /// The clock these settings call for: fixed if an as-of year is set,
    /// otherwise the system clock.
    pub fn clock(&self) -> Arc<dyn ClockPort> {
        match self.as_of_year {
            Some(year) => match FixedClock::in_year(year) {
                Some(clock) => Arc::new(clock),
                None => {
                    tracing::warn!(year, "KILMERE_AS_OF_YEAR out of range, using system clock");
                    Arc::new(SystemClock::new())
                }
            },
            None => Arc::new(SystemClock::new()),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}
