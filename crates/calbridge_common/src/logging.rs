//! Logging utilities for the calbridge service.
//!
//! This module provides a standardized approach to logging across all crates
//! of the workspace. `RUST_LOG` is respected; without it, the calbridge crates
//! log at the requested level and HTTP tracing at INFO.

use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at INFO level.
///
/// # Examples
///
/// ```
/// use calbridge_common::logging;
///
/// // Initialize with default log level (INFO)
/// logging::init();
///
/// // Initialize with a specific log level
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// Calling this more than once is harmless; only the first call installs a
/// subscriber.
pub fn init_with_level(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_thread_names(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

fn default_directives(level: Level) -> String {
    format!("warn,calbridge={},tower_http=info", level.as_str().to_lowercase())
}

/// Log a result, with different messages for success and error cases.
///
/// Returns the original result so it can be used in a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}
