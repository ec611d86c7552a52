//! Runtime configuration.
//!
//! Every field has a default matching the classic 20x20 board ticking every
//! 0.2s at a 60 Hz poll rate. Values may be overridden from a TOML file:
//!
//! ```toml
//! rows = 30
//! columns = 40
//! tick_interval_secs = 0.1
//! seed = "beacon"
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "LIFE_CONFIG";

/// File read when the environment variable is unset
pub const DEFAULT_CONFIG_FILE: &str = "life.toml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has mistyped fields.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values parsed but make no sense together.
    #[error("invalid configuration: {reason}")]
    Invalid { reason: String },
}

/// Initial board contents
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seed {
    /// Glider in the top-left corner
    #[default]
    Glider,
    Blinker,
    Block,
    Toad,
    Beacon,
    Empty,
    /// Each cell alive with probability `random_density`
    Random,
}

/// Simulator settings
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LifeConfig {
    pub rows: usize,
    pub columns: usize,
    /// Seconds between generation advances while running
    pub tick_interval_secs: f64,
    /// Input/render loop rate
    pub poll_rate_hz: f64,
    pub window_width: i32,
    pub window_height: i32,
    pub seed: Seed,
    pub random_density: f64,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            columns: 20,
            tick_interval_secs: 0.2,
            poll_rate_hz: 60.0,
            window_width: 800,
            window_height: 800,
            seed: Seed::default(),
            random_density: 0.3,
        }
    }
}

impl LifeConfig {
    /// Parse and validate TOML text
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    /// Load from `$LIFE_CONFIG`, else `life.toml`. A missing file means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path(std::env::var_os(CONFIG_ENV_VAR));
        Self::load_or_default(&path)
    }

    /// Read `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| Err(ConfigError::Invalid { reason: reason.to_owned() });

        if self.rows == 0 || self.columns == 0 {
            return invalid("rows and columns must be at least 1");
        }
        if !(self.tick_interval_secs.is_finite() && self.tick_interval_secs > 0.0) {
            return invalid("tick_interval_secs must be a positive number");
        }
        if !(self.poll_rate_hz.is_finite() && self.poll_rate_hz > 0.0) {
            return invalid("poll_rate_hz must be a positive number");
        }
        if self.window_width <= 0 || self.window_height <= 0 {
            return invalid("window dimensions must be positive");
        }
        if !(0.0..=1.0).contains(&self.random_density) {
            return invalid("random_density must be within [0, 1]");
        }
        Ok(())
    }
}

/// Path named by the environment variable, else the default file
fn config_path(from_env: Option<OsString>) -> PathBuf {
    from_env
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}
