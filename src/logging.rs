//! Tracing setup for the lifeline binary.
//!
//! Logs go to stderr so stdout carries only the rendered result.

use tracing::Level;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Environment variable selecting the log level
pub const LOG_LEVEL_ENV_VAR: &str = "LIFELINE_LOG_LEVEL";

/// Resolve the log level from the verbose flag and the environment value
pub fn resolve_level(verbose: bool, env_value: Option<&str>) -> Level {
    if verbose {
        return Level::DEBUG;
    }

    match env_value.map(str::to_lowercase).as_deref() {
        Some("trace") => Level::TRACE,
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("warn") => Level::WARN,
        Some("error") => Level::ERROR,
        _ => Level::WARN,
    }
}

/// Install the global subscriber. `RUST_LOG` directives take precedence.
pub fn init(verbose: bool) {
    let env_value = std::env::var(LOG_LEVEL_ENV_VAR).ok();
    let level = resolve_level(verbose, env_value.as_deref());

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok(); // Ignore error if already initialized

    tracing::debug!("Tracing initialized at level {}", level);
}
