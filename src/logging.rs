//! Logging initialization.
//!
//! TUI mode: logs go to the configured file, or nowhere when none is set
//! Print mode: logs go to stderr

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Result of logging initialization
pub struct LoggingHandle {
    /// Flushes buffered file output when dropped; keep it alive until exit.
    pub _guard: Option<WorkerGuard>,

    /// Where the TUI is logging, if anywhere
    pub log_file_path: Option<PathBuf>,
}

/// Filter directive after applying `--debug`
pub fn effective_level(config: &LoggingConfig, debug_override: bool) -> String {
    if debug_override {
        "debug".to_string()
    } else {
        config.level.clone()
    }
}

/// Split a log file path into the directory and file name the appender wants
pub fn split_log_path(path: &Path) -> Result<(PathBuf, String)> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("log file path has no file name: {}", path.display()))?
        .to_string();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, file_name))
}

/// Install the global subscriber.
///
/// Can only succeed once per process.
pub fn init_logging(
    config: &LoggingConfig,
    is_tui_mode: bool,
    debug_override: bool,
) -> Result<LoggingHandle> {
    let level = effective_level(config, debug_override);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if is_tui_mode {
        let Some(path) = &config.file else {
            return Ok(LoggingHandle {
                _guard: None,
                log_file_path: None,
            });
        };

        let (dir, file_name) = split_log_path(path)?;
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;

        let file_appender = tracing_appender::rolling::never(&dir, &file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .try_init()
            .context("failed to install log subscriber")?;

        Ok(LoggingHandle {
            _guard: Some(guard),
            log_file_path: Some(dir.join(file_name)),
        })
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("failed to install log subscriber")?;

        Ok(LoggingHandle {
            _guard: None,
            log_file_path: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag_overrides_level() {
        let config = LoggingConfig {
            level: "warn".to_string(),
            file: None,
        };
        assert_eq!(effective_level(&config, false), "warn");
        assert_eq!(effective_level(&config, true), "debug");
    }

    #[test]
    fn test_split_log_path() {
        let (dir, name) = split_log_path(Path::new("/var/log/walkthrough.log")).unwrap();
        assert_eq!(dir, PathBuf::from("/var/log"));
        assert_eq!(name, "walkthrough.log");
    }

    #[test]
    fn test_split_bare_file_name_uses_cwd() {
        let (dir, name) = split_log_path(Path::new("walkthrough.log")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, "walkthrough.log");
    }

    #[test]
    fn test_split_rejects_root() {
        assert!(split_log_path(Path::new("/")).is_err());
    }

    #[test]
    fn test_tui_without_file_installs_nothing() {
        let handle = init_logging(&LoggingConfig::default(), true, false).unwrap();
        assert!(handle._guard.is_none());
        assert!(handle.log_file_path.is_none());
    }
}
