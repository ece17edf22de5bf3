//! Storage Adapters
//!
//! Implementations of the SnapshotStorage port.

mod file_snapshot_storage;
mod in_memory_snapshot_storage;

pub use file_snapshot_storage::FileSnapshotStorage;
pub use in_memory_snapshot_storage::InMemorySnapshotStorage;
