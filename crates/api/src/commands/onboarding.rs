//! Onboarding commands

use std::time::Instant;

use tracing::warn;

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

pub fn is_onboarding_completed(ctx: &AppContext) -> bool {
    ctx.onboarding.is_completed()
}

/// Record onboarding completion. A failed write is logged and dropped;
/// the user just sees onboarding once more on the next launch.
pub fn complete_onboarding(ctx: &AppContext) {
    let start = Instant::now();
    let result = ctx.onboarding.set_completed(true);
    if let Err(err) = &result {
        warn!(error = %err, "failed to persist onboarding flag");
    }
    log_command_execution("onboarding::complete_onboarding", start.elapsed(), result.is_ok());
}
