//! File-backed hydration persistence
//!
//! Slots and settings each live under their own key in the blob store,
//! mirroring the flat key-value layout the mobile client used.

use async_trait::async_trait;
use goalfuel_core::{SettingsRepository, SlotRepository};
use goalfuel_domain::constants::{KEY_HYDRATION_ENTRIES, KEY_HYDRATION_SETTINGS};
use goalfuel_domain::{HydrationSettings, HydrationSlot, Result};

use super::blob_store::SharedBlobStore;
use super::{read_json, write_json};

/// Slot list repository over the blob store.
pub struct FileSlotRepository {
    store: SharedBlobStore,
}

impl FileSlotRepository {
    pub fn new(store: SharedBlobStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SlotRepository for FileSlotRepository {
    async fn load_slots(&self) -> Result<Vec<HydrationSlot>> {
        Ok(read_json(&self.store, KEY_HYDRATION_ENTRIES).unwrap_or_default())
    }

    async fn save_slots(&self, slots: &[HydrationSlot]) -> Result<()> {
        write_json(&self.store, KEY_HYDRATION_ENTRIES, &slots)
    }
}

/// Settings repository over the blob store.
pub struct FileSettingsRepository {
    store: SharedBlobStore,
}

impl FileSettingsRepository {
    pub fn new(store: SharedBlobStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SettingsRepository for FileSettingsRepository {
    async fn load_settings(&self) -> Result<HydrationSettings> {
        Ok(read_json(&self.store, KEY_HYDRATION_SETTINGS).unwrap_or_default())
    }

    async fn save_settings(&self, settings: &HydrationSettings) -> Result<()> {
        write_json(&self.store, KEY_HYDRATION_SETTINGS, settings)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{Local, TimeZone};
    use tempfile::TempDir;

    use crate::storage::FileBlobStore;

    use super::*;

    fn store() -> (SharedBlobStore, TempDir) {
        let dir = TempDir::new().expect("create temp dir");
        let store = Arc::new(FileBlobStore::open(dir.path()).expect("open store"));
        (store, dir)
    }

    #[tokio::test]
    async fn slots_empty_when_nothing_stored() {
        let (store, _dir) = store();
        let repo = FileSlotRepository::new(store);
        assert!(repo.load_slots().await.expect("load").is_empty());
    }

    #[tokio::test]
    async fn slots_round_trip() {
        let (store, _dir) = store();
        let repo = FileSlotRepository::new(store);
        let time = Local.with_ymd_and_hms(2025, 6, 12, 8, 0, 0).single().expect("time");
        let slots = vec![HydrationSlot::scheduled(500, time)];

        repo.save_slots(&slots).await.expect("save");
        assert_eq!(repo.load_slots().await.expect("load"), slots);
    }

    #[tokio::test]
    async fn corrupt_slot_blob_reads_as_empty() {
        let (store, _dir) = store();
        store.write(KEY_HYDRATION_ENTRIES, b"{not json").expect("write");
        let repo = FileSlotRepository::new(store);
        assert!(repo.load_slots().await.expect("load").is_empty());
    }

    #[tokio::test]
    async fn settings_default_when_nothing_stored() {
        let (store, _dir) = store();
        let repo = FileSettingsRepository::new(store);
        assert_eq!(repo.load_settings().await.expect("load"), HydrationSettings::default());
    }

    #[tokio::test]
    async fn settings_round_trip() {
        let (store, _dir) = store();
        let repo = FileSettingsRepository::new(store);
        let settings = HydrationSettings {
            daily_goal: 2.5,
            reminder_time: 30,
            sound_notifications: false,
            vibration_enabled: true,
        };

        repo.save_settings(&settings).await.expect("save");
        assert_eq!(repo.load_settings().await.expect("load"), settings);
    }
}
