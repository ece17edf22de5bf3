//! In-Memory Snapshot Storage Adapter
//!
//! Stores snapshot slots in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::session::SnapshotSlot;
use crate::ports::{SnapshotStorage, SnapshotStorageError};

/// In-memory storage for session snapshot slots
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStorage {
    slots: Arc<RwLock<HashMap<SnapshotSlot, String>>>,
}

impl InMemorySnapshotStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored slots (useful for tests)
    pub async fn clear(&self) {
        self.slots.write().await.clear();
    }

    /// Get the number of stored slots
    pub async fn slot_count(&self) -> usize {
        self.slots.read().await.len()
    }
}

#[async_trait]
impl SnapshotStorage for InMemorySnapshotStorage {
    async fn read(&self, slot: SnapshotSlot) -> Result<Option<String>, SnapshotStorageError> {
        Ok(self.slots.read().await.get(&slot).cloned())
    }

    async fn write(&self, slot: SnapshotSlot, value: &str) -> Result<(), SnapshotStorageError> {
        self.slots.write().await.insert(slot, value.to_string());
        Ok(())
    }

    async fn remove(&self, slot: SnapshotSlot) -> Result<(), SnapshotStorageError> {
        self.slots.write().await.remove(&slot);
        Ok(())
    }
}
