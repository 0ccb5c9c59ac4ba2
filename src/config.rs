//! Startup configuration.
//!
//! Values are baked in at build time through `TRELLO_BOARD_ID` and
//! `TRELLO_LOG_LEVEL`; there is no runtime configuration source in the
//! browser.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

pub const DEFAULT_BOARD_ID: &str = "board-1";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Board opened at `/`.
    pub default_board_id: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_board_id: DEFAULT_BOARD_ID.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("TRELLO_BOARD_ID"), option_env!("TRELLO_LOG_LEVEL"))
    }

    /// Blank or unparseable values fall back to the defaults.
    pub fn from_values(board_id: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            default_board_id: board_id
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map_or(defaults.default_board_id, str::to_string),
            log_level: log_level
                .and_then(|level| log::Level::from_str(level.trim()).ok())
                .unwrap_or(defaults.log_level),
        }
    }
}
