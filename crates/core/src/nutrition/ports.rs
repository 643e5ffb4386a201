//! Port interfaces for the nutrition diary

use async_trait::async_trait;
use goalfuel_domain::{MealEntry, Result};

/// Trait for persisting the meal diary as one blob.
#[async_trait]
pub trait MealRepository: Send + Sync {
    async fn load_meals(&self) -> Result<Vec<MealEntry>>;

    async fn save_meals(&self, entries: &[MealEntry]) -> Result<()>;
}
