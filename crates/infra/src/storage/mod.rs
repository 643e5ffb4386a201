//! File-backed persistence
//!
//! The store is a UserDefaults-style key-value blob store: each key maps to
//! one JSON file, lists are overwritten wholesale on every save, and there
//! are no transactions.

pub mod blob_store;
pub mod hydration_repository;
pub mod nutrition_repository;
pub mod onboarding;
pub mod training_repository;

pub use blob_store::FileBlobStore;
pub use hydration_repository::{FileSettingsRepository, FileSlotRepository};
pub use nutrition_repository::FileMealRepository;
pub use onboarding::OnboardingFlag;
pub use training_repository::FileTrainingRepository;

use goalfuel_domain::{GoalFuelError, Result as DomainResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Decode the blob under `key`, treating a missing blob, a failed read or a
/// corrupt payload all as absence of data.
pub(crate) fn read_json<T: DeserializeOwned>(store: &FileBlobStore, key: &str) -> Option<T> {
    let bytes = match store.read(key) {
        Ok(bytes) => bytes?,
        Err(err) => {
            warn!(key, error = %err, "failed to read blob, treating as absent");
            return None;
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, error = %err, "corrupt blob, treating as absent");
            None
        }
    }
}

/// Encode and overwrite the blob under `key`.
pub(crate) fn write_json<T: Serialize>(
    store: &FileBlobStore,
    key: &str,
    value: &T,
) -> DomainResult<()> {
    let bytes = serde_json::to_vec(value)
        .map_err(|err| GoalFuelError::Serialization(format!("encode '{key}': {err}")))?;
    store.write(key, &bytes)?;
    Ok(())
}
