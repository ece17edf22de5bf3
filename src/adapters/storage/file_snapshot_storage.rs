//! File-based Snapshot Storage Adapter
//!
//! Stores each snapshot slot as its own file under a base directory,
//! named after the slot key (e.g. `essentia_current_screen`).

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::session::SnapshotSlot;
use crate::ports::{SnapshotStorage, SnapshotStorageError};

/// File-based storage for session snapshot slots
#[derive(Debug, Clone)]
pub struct FileSnapshotStorage {
    base_path: PathBuf,
}

impl FileSnapshotStorage {
    /// Create a new file storage with a base directory
    ///
    /// The directory is created on first write.
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileSnapshotStorage::new("./.essentia/session");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the file path of a slot
    fn slot_path(&self, slot: SnapshotSlot) -> PathBuf {
        self.base_path.join(slot.key())
    }
}

#[async_trait]
impl SnapshotStorage for FileSnapshotStorage {
    /// Reads a slot. Content that is not UTF-8 counts as a corrupt slot
    /// and reads as absent.
    async fn read(&self, slot: SnapshotSlot) -> Result<Option<String>, SnapshotStorageError> {
        let bytes = match fs::read(self.slot_path(slot)).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SnapshotStorageError::io(slot, e)),
        };

        match String::from_utf8(bytes) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) => {
                warn!(slot = %slot, error = %e, "Ignoring snapshot slot that is not UTF-8");
                Ok(None)
            }
        }
    }

    async fn write(&self, slot: SnapshotSlot, value: &str) -> Result<(), SnapshotStorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| SnapshotStorageError::io(slot, e))?;

        // Write beside the target, then rename over it
        let path = self.slot_path(slot);
        let staging = path.with_extension("tmp");
        fs::write(&staging, value)
            .await
            .map_err(|e| SnapshotStorageError::io(slot, e))?;
        fs::rename(&staging, &path)
            .await
            .map_err(|e| SnapshotStorageError::io(slot, e))?;

        debug!(slot = %slot, bytes = value.len(), "Wrote snapshot slot");
        Ok(())
    }

    async fn remove(&self, slot: SnapshotSlot) -> Result<(), SnapshotStorageError> {
        match fs::remove_file(self.slot_path(slot)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SnapshotStorageError::io(slot, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::SessionSnapshot;
    use tempfile::TempDir;

    fn storage() -> (TempDir, FileSnapshotStorage) {
        let dir = TempDir::new().unwrap();
        let storage = FileSnapshotStorage::new(dir.path().join("session"));
        (dir, storage)
    }

    #[tokio::test]
    async fn read_of_missing_slot_is_none() {
        let (_dir, storage) = storage();
        assert_eq!(storage.read(SnapshotSlot::CurrentScreen).await.unwrap(), None);
    }

    #[tokio::test]
    async fn write_creates_directory_and_file_per_slot() {
        let (_dir, storage) = storage();

        storage.write(SnapshotSlot::CurrentScreen, "5").await.unwrap();

        let file = storage.base_path().join("essentia_current_screen");
        assert_eq!(std::fs::read_to_string(file).unwrap(), "5");
        assert_eq!(
            storage.read(SnapshotSlot::CurrentScreen).await.unwrap().as_deref(),
            Some("5")
        );
        assert_eq!(storage.read(SnapshotSlot::VisitedScreens).await.unwrap(), None);
    }

    #[tokio::test]
    async fn read_of_non_utf8_slot_is_none() {
        let (_dir, storage) = storage();
        std::fs::create_dir_all(storage.base_path()).unwrap();
        std::fs::write(storage.base_path().join("essentia_profile_data"), [0xff, 0xfe, 0x00]).unwrap();

        assert_eq!(storage.read(SnapshotSlot::ProfileData).await.unwrap(), None);
    }

    #[tokio::test]
    async fn write_overwrites_previous_value() {
        let (_dir, storage) = storage();
        storage.write(SnapshotSlot::VisitedScreens, "[1]").await.unwrap();
        storage.write(SnapshotSlot::VisitedScreens, "[1,2]").await.unwrap();
        assert_eq!(
            storage.read(SnapshotSlot::VisitedScreens).await.unwrap().as_deref(),
            Some("[1,2]")
        );
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let (_dir, storage) = storage();
        storage.write(SnapshotSlot::ProfileData, "{}").await.unwrap();
        storage.remove(SnapshotSlot::ProfileData).await.unwrap();
        storage.remove(SnapshotSlot::ProfileData).await.unwrap();
        assert_eq!(storage.read(SnapshotSlot::ProfileData).await.unwrap(), None);
    }

    #[tokio::test]
    async fn store_and_load_whole_snapshot() {
        let (_dir, storage) = storage();
        let snapshot = SessionSnapshot {
            current_screen: Some("3".to_string()),
            profile_data: None,
            visited_screens: Some("[2]".to_string()),
        };

        storage.write(SnapshotSlot::ProfileData, "{\"stale\":true}").await.unwrap();
        storage.store(&snapshot).await.unwrap();

        assert_eq!(storage.load().await.unwrap(), snapshot);
    }

    #[tokio::test]
    async fn separate_instances_share_the_directory() {
        let (dir, storage) = storage();
        storage.write(SnapshotSlot::CurrentScreen, "9").await.unwrap();

        let reopened = FileSnapshotStorage::new(dir.path().join("session"));
        assert_eq!(
            reopened.read(SnapshotSlot::CurrentScreen).await.unwrap().as_deref(),
            Some("9")
        );
    }
}
