use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;
use tracing::Level;

pub const SEED_VAR: &str = "MAZEPATH_SEED";
pub const LOG_LEVEL_VAR: &str = "MAZEPATH_LOG";
pub const LOG_DIR_VAR: &str = "MAZEPATH_LOG_DIR";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an unsigned integer, got {value:?}")]
    InvalidSeed { var: &'static str, value: String },
    #[error("{var} must be one of trace, debug, info, warn, error; got {value:?}")]
    InvalidLogLevel { var: &'static str, value: String },
}

/// Runtime settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fixed seed for the maze generator. `None` seeds from the clock.
    pub seed: Option<u64>,
    pub log_level: Level,
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_level: Level::INFO,
            log_dir: std::env::temp_dir(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from any variable lookup. Unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(SEED_VAR) {
            let seed = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidSeed {
                    var: SEED_VAR,
                    value: value.clone(),
                })?;
            config.seed = Some(seed);
        }

        if let Some(value) = lookup(LOG_LEVEL_VAR) {
            config.log_level =
                Level::from_str(value.trim()).map_err(|_| ConfigError::InvalidLogLevel {
                    var: LOG_LEVEL_VAR,
                    value: value.clone(),
                })?;
        }

        if let Some(value) = lookup(LOG_DIR_VAR) {
            config.log_dir = PathBuf::from(value);
        }

        Ok(config)
    }
}
