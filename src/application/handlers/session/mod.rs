//! Session command and query handlers.

mod error;
mod extract_profile;
mod navigate;
mod restore_session;

pub use error::SessionCommandError;
pub use extract_profile::{
    ExtractProfileCommand, ExtractProfileHandler, ExtractProfileResult, ExtractionOutcome,
};
pub use navigate::{NavigateHandler, NavigationCommand, NavigationResult};
pub use restore_session::RestoreSessionHandler;

use crate::domain::session::FeedbackSession;
use crate::ports::SnapshotStorage;

/// Writes the session's three slots, removing the absent ones.
async fn persist(
    storage: &dyn SnapshotStorage,
    session: &FeedbackSession,
) -> Result<(), SessionCommandError> {
    let snapshot = session.to_snapshot()?;
    storage.store(&snapshot).await?;
    Ok(())
}
