//! Tracing setup and command execution logging

use std::time::Duration;

use goalfuel_domain::GoalFuelError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `filter` is the configured default; the `RUST_LOG` environment variable
/// still wins when set.
pub fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter.to_string()));
    tracing_subscriber::fmt().with_env_filter(env_filter).with_target(true).init();
}

/// Log the outcome of a command execution with structured fields.
///
/// `command` is the logical command identifier (e.g. `"hydration::add_water"`).
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `GoalFuelError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &GoalFuelError) -> &'static str {
    match error {
        GoalFuelError::Storage(_) => "storage",
        GoalFuelError::Serialization(_) => "serialization",
        GoalFuelError::Config(_) => "config",
        GoalFuelError::NotFound(_) => "not_found",
        GoalFuelError::InvalidInput(_) => "invalid_input",
        GoalFuelError::Internal(_) => "internal",
    }
}
