//! ExtractProfileHandler - Command handler for the intake step.
//!
//! Runs the extraction contract once per session. A session that already
//! holds a profile is moved on to the overview without a second call.

use std::sync::Arc;

use tracing::{info, warn};

use super::{persist, SessionCommandError};
use crate::domain::profile::ProfileOverview;
use crate::domain::session::{FeedbackSession, ScreenPosition, SnapshotSlot};
use crate::ports::{DocumentSet, ProfileExtractor, SnapshotStorage};

/// Command to extract the session profile from uploaded reports.
#[derive(Debug, Clone, Default)]
pub struct ExtractProfileCommand {
    pub documents: DocumentSet,
}

/// Whether the extractor was called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionOutcome {
    Extracted,
    AlreadyPresent,
}

/// Result of a successful extraction command.
#[derive(Debug, Clone)]
pub struct ExtractProfileResult {
    pub outcome: ExtractionOutcome,
    pub overview: ProfileOverview,
}

/// Handler for profile extraction.
pub struct ExtractProfileHandler {
    extractor: Arc<dyn ProfileExtractor>,
    storage: Arc<dyn SnapshotStorage>,
}

impl ExtractProfileHandler {
    pub fn new(extractor: Arc<dyn ProfileExtractor>, storage: Arc<dyn SnapshotStorage>) -> Self {
        Self { extractor, storage }
    }

    pub async fn handle(
        &self,
        session: &mut FeedbackSession,
        cmd: ExtractProfileCommand,
    ) -> Result<ExtractProfileResult, SessionCommandError> {
        let (outcome, overview) = if let Some(overview) = session.overview() {
            info!(session_id = %session.id(), "Profile already extracted, skipping extraction");
            (ExtractionOutcome::AlreadyPresent, overview)
        } else {
            // 1. Call the extractor
            match self.extractor.extract(&cmd.documents).await {
                Ok(profile) => {
                    let overview = ProfileOverview::from_profile(&profile);
                    session.set_profile(profile);
                    (ExtractionOutcome::Extracted, overview)
                }
                Err(e) => {
                    // 2a. Leave no profile behind, in memory or on disk
                    warn!(session_id = %session.id(), error = %e, "Profile extraction failed");
                    session.clear_profile();
                    if let Err(storage_err) = self.storage.remove(SnapshotSlot::ProfileData).await {
                        warn!(error = %storage_err, "Failed to clear stored profile slot");
                    }
                    return Err(e.into());
                }
            }
        };

        // 2b. Move to the overview and persist
        session.move_to(ScreenPosition::overview());
        persist(self.storage.as_ref(), session).await?;

        info!(
            session_id = %session.id(),
            extractor = %self.extractor.extractor_info().name,
            outcome = ?outcome,
            "Profile ready"
        );
        Ok(ExtractProfileResult { outcome, overview })
    }
}
