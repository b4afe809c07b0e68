//! Runtime configuration from environment variables.
//!
//! - `TETRIS_FALL_MS`: gravity interval in milliseconds (default 200)
//! - `TETRIS_SEED`: shape RNG seed (default: derived from the wall clock)
//! - `TETRIS_LOG_PATH`: log file; logging is off when unset
//! - `TETRIS_LOG`: env_logger filter (default "info")

use std::env;

use crate::types::FALL_INTERVAL_MS;

pub const FALL_MS_VAR: &str = "TETRIS_FALL_MS";
pub const SEED_VAR: &str = "TETRIS_SEED";
pub const LOG_PATH_VAR: &str = "TETRIS_LOG_PATH";
pub const LOG_FILTER_VAR: &str = "TETRIS_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub fall_interval_ms: u32,
    pub seed: Option<u32>,
    pub log_path: Option<String>,
    pub log_filter: String,
    /// Variables that were set but unusable; defaults were used instead.
    pub rejected: Vec<&'static str>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fall_interval_ms: FALL_INTERVAL_MS,
            seed: None,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            rejected: Vec::new(),
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(raw) = get(FALL_MS_VAR) {
            match raw.parse::<u32>() {
                Ok(ms) if ms > 0 => config.fall_interval_ms = ms,
                _ => config.rejected.push(FALL_MS_VAR),
            }
        }

        if let Some(raw) = get(SEED_VAR) {
            match raw.parse::<u32>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => config.rejected.push(SEED_VAR),
            }
        }

        config.log_path = get(LOG_PATH_VAR);
        if let Some(filter) = get(LOG_FILTER_VAR) {
            config.log_filter = filter;
        }

        config
    }
}
