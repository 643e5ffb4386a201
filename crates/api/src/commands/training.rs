//! Training catalog commands

use std::time::Instant;

use goalfuel_domain::{Result, TrainingProgram};

use crate::context::AppContext;
use crate::utils::logging::{error_label, log_command_execution};

/// Built-in programs followed by the user's saved ones.
pub async fn load_trainings(ctx: &AppContext) -> Vec<TrainingProgram> {
    let start = Instant::now();
    let programs = ctx.trainings.load().await;
    log_command_execution("training::load_trainings", start.elapsed(), true);
    programs
}

/// Create a user program. Validation and save failures surface to the
/// caller; the UI shows them to the user.
pub async fn add_training(
    ctx: &AppContext,
    name: &str,
    description: &str,
    level: &str,
    duration: &str,
    icon_name: Option<String>,
) -> Result<TrainingProgram> {
    let start = Instant::now();
    let result = ctx.trainings.add(name, description, level, duration, icon_name).await;

    log_command_execution("training::add_training", start.elapsed(), result.is_ok());
    if let Err(err) = &result {
        tracing::warn!(error = %err, error_type = error_label(err), "add_training failed");
    }
    result
}
