//! Data reset command

use std::time::Instant;

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Irreversibly clear all domain data and broadcast `DataReset`.
///
/// The confirmation dialog lives in the UI shell; by the time this runs
/// the user has already agreed. The onboarding flag survives.
pub async fn reset_all_data(ctx: &AppContext) {
    let start = Instant::now();
    ctx.reset.reset_all().await;
    log_command_execution("reset::reset_all_data", start.elapsed(), true);
}
