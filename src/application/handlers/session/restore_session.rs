//! RestoreSessionHandler - Query handler rebuilding a session from storage.

use std::sync::Arc;

use tracing::info;

use super::SessionCommandError;
use crate::domain::foundation::SessionId;
use crate::domain::session::FeedbackSession;
use crate::ports::SnapshotStorage;

/// Handler for restoring the persisted session.
pub struct RestoreSessionHandler {
    storage: Arc<dyn SnapshotStorage>,
}

impl RestoreSessionHandler {
    pub fn new(storage: Arc<dyn SnapshotStorage>) -> Self {
        Self { storage }
    }

    /// Loads all slots and rebuilds the session. Corrupt slots are skipped.
    pub async fn handle(&self) -> Result<FeedbackSession, SessionCommandError> {
        let snapshot = self.storage.load().await?;
        let session = FeedbackSession::from_snapshot(SessionId::new(), &snapshot);

        info!(
            session_id = %session.id(),
            screen = session.position().index(),
            has_profile = session.has_profile(),
            visited = session.visited().len(),
            "Restored session"
        );
        Ok(session)
    }
}
