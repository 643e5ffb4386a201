//! Port interfaces for the training catalog

use async_trait::async_trait;
use goalfuel_domain::{Result, TrainingProgram};

/// Trait for persisting user-created training programs.
///
/// Only user programs are stored; the built-in catalog lives in code.
#[async_trait]
pub trait TrainingRepository: Send + Sync {
    async fn load_programs(&self) -> Result<Vec<TrainingProgram>>;

    async fn save_programs(&self, programs: &[TrainingProgram]) -> Result<()>;
}
