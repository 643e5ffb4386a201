//! File-backed meal diary persistence

use async_trait::async_trait;
use goalfuel_core::MealRepository;
use goalfuel_domain::constants::KEY_MEAL_ENTRIES;
use goalfuel_domain::{MealEntry, Result};

use super::blob_store::SharedBlobStore;
use super::{read_json, write_json};

/// Meal diary repository over the blob store.
pub struct FileMealRepository {
    store: SharedBlobStore,
}

impl FileMealRepository {
    pub fn new(store: SharedBlobStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MealRepository for FileMealRepository {
    async fn load_meals(&self) -> Result<Vec<MealEntry>> {
        Ok(read_json(&self.store, KEY_MEAL_ENTRIES).unwrap_or_default())
    }

    async fn save_meals(&self, entries: &[MealEntry]) -> Result<()> {
        write_json(&self.store, KEY_MEAL_ENTRIES, &entries)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tempfile::TempDir;

    use crate::storage::FileBlobStore;

    use super::*;

    #[tokio::test]
    async fn meals_round_trip_and_default_empty() {
        let dir = TempDir::new().expect("create temp dir");
        let store = Arc::new(FileBlobStore::open(dir.path()).expect("open store"));
        let repo = FileMealRepository::new(store);

        assert!(repo.load_meals().await.expect("load").is_empty());

        let meals =
            vec![MealEntry::new("Lunch", "12:30 PM", "650", "Chicken bowl", "42g", "55g", "18g")];
        repo.save_meals(&meals).await.expect("save");
        assert_eq!(repo.load_meals().await.expect("load"), meals);
    }
}
