//! Tracing subscriber setup.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Picks the log filter: `--log-level`, then `RUST_LOG`, then the config file.
///
/// A malformed filter from any of the three is an error rather than a silent
/// fallback.
pub fn filter(cli_level: Option<&str>, env: Option<&str>, config_level: &str) -> Result<EnvFilter> {
    let (directives, source) = match (cli_level, env) {
        (Some(level), _) => (level, "--log-level"),
        (None, Some(env)) => (env, EnvFilter::DEFAULT_ENV),
        (None, None) => (config_level, "log_level"),
    };
    EnvFilter::try_new(directives)
        .with_context(|| format!("Invalid log filter {:?} from {}", directives, source))
}

/// Reads `RUST_LOG`, treating an unset variable as absent.
pub fn env_filter_var() -> Result<Option<String>> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).context("Failed to read RUST_LOG"),
    }
}

/// Sends logs to `path` without ANSI colours, so they don't tear the terminal UI.
pub fn init_file(filter: EnvFilter, path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Sends logs to stderr, keeping stdout for command output.
pub fn init_stderr(filter: EnvFilter) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
