//! Errors surfaced by session command handlers.

use thiserror::Error;

use crate::ports::{ExtractionFailed, SnapshotStorageError};

/// Failure of a session command.
#[derive(Debug, Error)]
pub enum SessionCommandError {
    #[error(transparent)]
    Extraction(#[from] ExtractionFailed),

    #[error("Snapshot persistence failed: {0}")]
    Storage(#[from] SnapshotStorageError),
}

impl From<serde_json::Error> for SessionCommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(err.into())
    }
}

impl SessionCommandError {
    /// The extraction failure, if that is what this is.
    pub fn as_extraction(&self) -> Option<&ExtractionFailed> {
        match self {
            Self::Extraction(e) => Some(e),
            Self::Storage(_) => None,
        }
    }
}
