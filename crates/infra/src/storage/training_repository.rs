//! File-backed training program persistence
//!
//! Only user-created programs are stored; the built-in catalog is code.

use async_trait::async_trait;
use goalfuel_core::TrainingRepository;
use goalfuel_domain::constants::KEY_SAVED_TRAININGS;
use goalfuel_domain::{Result, TrainingProgram};

use super::blob_store::SharedBlobStore;
use super::{read_json, write_json};

/// User training program repository over the blob store.
pub struct FileTrainingRepository {
    store: SharedBlobStore,
}

impl FileTrainingRepository {
    pub fn new(store: SharedBlobStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TrainingRepository for FileTrainingRepository {
    async fn load_programs(&self) -> Result<Vec<TrainingProgram>> {
        Ok(read_json(&self.store, KEY_SAVED_TRAININGS).unwrap_or_default())
    }

    async fn save_programs(&self, programs: &[TrainingProgram]) -> Result<()> {
        write_json(&self.store, KEY_SAVED_TRAININGS, &programs)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tempfile::TempDir;

    use crate::storage::FileBlobStore;

    use super::*;

    #[tokio::test]
    async fn programs_round_trip_and_default_empty() {
        let dir = TempDir::new().expect("create temp dir");
        let store = Arc::new(FileBlobStore::open(dir.path()).expect("open store"));
        let repo = FileTrainingRepository::new(store);

        assert!(repo.load_programs().await.expect("load").is_empty());

        let programs = vec![TrainingProgram::new(
            "Evening sprints",
            "Hill repeats",
            "Advanced",
            "30 min",
            Some("figure.run".into()),
        )];
        repo.save_programs(&programs).await.expect("save");
        assert_eq!(repo.load_programs().await.expect("load"), programs);
    }
}
