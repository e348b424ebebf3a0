//! Runtime configuration
//!
//! Read from an optional TOML file; every field has a default so an empty
//! file (or no file at all) is valid. Command-line flags are applied on top
//! by the binary.
//!
//! ```toml
//! [logging]
//! level = "debug"
//! file = "/tmp/walkthrough.log"
//!
//! [reveal]
//! line_delay_ms = 30
//! autoplay_interval_ms = 4000
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub logging: LoggingConfig,
    pub reveal: RevealConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing` filter directive; `RUST_LOG` takes precedence
    pub level: String,
    /// Log file used while the TUI owns the terminal. Without one, the TUI
    /// runs with logging off.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Delay between consecutive code lines appearing; 0 shows the block at once
    pub line_delay_ms: u64,
    /// Time each step stays up during autoplay
    pub autoplay_interval_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            line_delay_ms: 30,
            autoplay_interval_ms: 4000,
        }
    }
}

impl RevealConfig {
    pub fn line_delay(&self) -> Duration {
        Duration::from_millis(self.line_delay_ms)
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }
}
