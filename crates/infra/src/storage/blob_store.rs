//! JSON blob store over flat files
//!
//! One file per key under the configured data directory. Access is guarded
//! by an in-process lock so concurrent repository calls cannot interleave a
//! read with a partial write; the store is process-wide, like the platform
//! defaults store it replaces.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use goalfuel_core::DomainStore;
use goalfuel_domain::Result as DomainResult;
use parking_lot::RwLock;
use tracing::debug;

use crate::errors::InfraError;

/// Flat-file key-value store for JSON blobs.
pub struct FileBlobStore {
    dir: PathBuf,
    guard: RwLock<()>,
}

impl FileBlobStore {
    /// Open (and create if needed) the store directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, InfraError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|source| InfraError::Io { key: dir.display().to_string(), source })?;
        Ok(Self { dir, guard: RwLock::new(()) })
    }

    /// Read the blob stored under `key`, `None` when absent.
    pub fn read(&self, key: &str) -> Result<Option<Vec<u8>>, InfraError> {
        let _guard = self.guard.read();
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(InfraError::Io { key: key.to_string(), source }),
        }
    }

    /// Overwrite the blob stored under `key`.
    pub fn write(&self, key: &str, bytes: &[u8]) -> Result<(), InfraError> {
        let _guard = self.guard.write();
        fs::write(self.path_for(key), bytes)
            .map_err(|source| InfraError::Io { key: key.to_string(), source })?;
        debug!(key, len = bytes.len(), "blob written");
        Ok(())
    }

    /// Remove the blob under `key`. Removing an absent key succeeds.
    pub fn remove_blob(&self, key: &str) -> Result<(), InfraError> {
        let _guard = self.guard.write();
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(InfraError::Io { key: key.to_string(), source }),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl DomainStore for FileBlobStore {
    async fn remove(&self, key: &str) -> DomainResult<()> {
        // Local flat-file access is treated as synchronous and fast; no
        // executor hop for these tiny blobs.
        self.remove_blob(key)?;
        Ok(())
    }
}

/// Shared handle type used by the repositories.
pub type SharedBlobStore = Arc<FileBlobStore>;

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn store() -> (FileBlobStore, TempDir) {
        let dir = TempDir::new().expect("create temp dir");
        let store = FileBlobStore::open(dir.path()).expect("open store");
        (store, dir)
    }

    #[test]
    fn read_missing_key_is_none() {
        let (store, _dir) = store();
        assert_eq!(store.read("nothing").expect("read"), None);
    }

    #[test]
    fn write_then_read_round_trips() {
        let (store, _dir) = store();
        store.write("greeting", b"[1,2,3]").expect("write");
        assert_eq!(store.read("greeting").expect("read"), Some(b"[1,2,3]".to_vec()));
    }

    #[test]
    fn write_overwrites_wholesale() {
        let (store, _dir) = store();
        store.write("k", b"first").expect("write");
        store.write("k", b"x").expect("write");
        assert_eq!(store.read("k").expect("read"), Some(b"x".to_vec()));
    }

    #[test]
    fn remove_is_idempotent() {
        let (store, _dir) = store();
        store.write("k", b"v").expect("write");
        store.remove_blob("k").expect("first remove");
        store.remove_blob("k").expect("second remove");
        assert_eq!(store.read("k").expect("read"), None);
    }
}
