//! Snapshot Storage Port - Interface for persisting session snapshot slots.
//!
//! Each slot is stored independently, so any of them can be present or
//! absent when a session is restored.

use async_trait::async_trait;

use crate::domain::session::{SessionSnapshot, SnapshotSlot};

/// Errors that can occur during snapshot storage operations
#[derive(Debug, thiserror::Error)]
pub enum SnapshotStorageError {
    #[error("IO error on slot {slot}: {message}")]
    Io { slot: SnapshotSlot, message: String },

    #[error("Failed to serialize snapshot: {0}")]
    Serialization(String),
}

impl SnapshotStorageError {
    pub fn io(slot: SnapshotSlot, err: impl std::fmt::Display) -> Self {
        Self::Io {
            slot,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SnapshotStorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Port for reading and writing snapshot slots
#[async_trait]
pub trait SnapshotStorage: Send + Sync {
    /// Read a slot's raw contents, `None` if absent
    async fn read(&self, slot: SnapshotSlot) -> Result<Option<String>, SnapshotStorageError>;

    /// Write a slot, replacing previous contents
    async fn write(&self, slot: SnapshotSlot, value: &str) -> Result<(), SnapshotStorageError>;

    /// Remove a slot. Removing an absent slot is not an error.
    async fn remove(&self, slot: SnapshotSlot) -> Result<(), SnapshotStorageError>;

    /// Read all three slots
    async fn load(&self) -> Result<SessionSnapshot, SnapshotStorageError> {
        let mut snapshot = SessionSnapshot::default();
        for slot in SnapshotSlot::ALL {
            snapshot.set(slot, self.read(slot).await?);
        }
        Ok(snapshot)
    }

    /// Write present slots and remove absent ones
    async fn store(&self, snapshot: &SessionSnapshot) -> Result<(), SnapshotStorageError> {
        for slot in SnapshotSlot::ALL {
            match snapshot.get(slot) {
                Some(value) => self.write(slot, value).await?,
                None => self.remove(slot).await?,
            }
        }
        Ok(())
    }
}
