//! Runtime configuration loaded from environment variables.
//!
//! Values may also come from a `.env` file in the working directory, loaded
//! through `dotenvy` before the environment is read.

use crate::conflicts::{ConflictWindow, DEFAULT_WINDOW_MINUTES};
use crate::error::ConfigError;

pub const DB_PATH_KEY: &str = "CALENDAR_DB_PATH";
pub const WINDOW_KEY: &str = "CALENDAR_CONFLICT_WINDOW_MINUTES";
pub const LOG_KEY: &str = "CALENDAR_LOG";

pub const DEFAULT_DB_PATH: &str = ".calendar/calendar.db";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarConfig {
    /// SQLite database file.
    pub db_path: String,
    /// Proximity window used by the conflict scanner.
    pub conflict_window: ConflictWindow,
    /// `tracing` filter directive for the binary's subscriber.
    pub log_filter: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
            conflict_window: ConflictWindow::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CalendarConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the window variable is set but
    /// is not a non-negative number of minutes.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = lookup(DB_PATH_KEY)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

        let conflict_window = match lookup(WINDOW_KEY) {
            Some(value) => parse_window(&value)?,
            None => ConflictWindow::from_minutes(DEFAULT_WINDOW_MINUTES),
        };

        let log_filter = lookup(LOG_KEY).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            db_path,
            conflict_window,
            log_filter,
        })
    }
}

pub fn parse_window(value: &str) -> Result<ConflictWindow, ConfigError> {
    value
        .trim()
        .parse::<u32>()
        .map(ConflictWindow::from_minutes)
        .map_err(|_| ConfigError::InvalidValue {
            key: WINDOW_KEY,
            value: value.to_string(),
        })
}
