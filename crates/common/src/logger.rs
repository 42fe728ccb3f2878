//! tracing setup for the server and the CLI
//!
//! `RUST_LOG` always wins; otherwise the configured level applies.

use crate::error::DocsumError;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

const FALLBACK_LEVEL: Level = Level::INFO;

/// Console plus append-only file logging for the server
pub fn setup_logging(log_file: &Path, log_level: &str) -> Result<(), DocsumError> {
    if let Some(dir) = log_file.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| {
            DocsumError::config(format!("Failed to create log directory {}: {}", dir.display(), e))
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| {
            DocsumError::config(format!("Failed to open log file {}: {}", log_file.display(), e))
        })?;

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(build_filter(log_level));

    let file_layer = fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(build_filter(log_level));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| DocsumError::config(format!("Failed to install logger: {}", e)))?;

    warn_on_unknown_level(log_level);
    tracing::info!("Logging to {} at level {}", log_file.display(), log_level);

    Ok(())
}

/// stderr-only logging so stdout carries just the rendered summary
pub fn setup_console_logging(log_level: &str) -> Result<(), DocsumError> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(build_filter(log_level))
        .try_init()
        .map_err(|e| DocsumError::config(format!("Failed to install logger: {}", e)))?;

    warn_on_unknown_level(log_level);
    Ok(())
}

fn build_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = parse_log_level(log_level).unwrap_or(FALLBACK_LEVEL);
        EnvFilter::new(level.as_str().to_lowercase())
    })
}

fn warn_on_unknown_level(log_level: &str) {
    if parse_log_level(log_level).is_none() {
        tracing::warn!(
            "Unknown log level '{}', using {}",
            log_level,
            FALLBACK_LEVEL.as_str().to_lowercase()
        );
    }
}

/// Map a level name to a [`Level`], `None` when unrecognized
pub fn parse_log_level(level: &str) -> Option<Level> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}
