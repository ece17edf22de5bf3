//! NavigateHandler - Command handler for moving through the wizard.

use std::sync::Arc;

use tracing::debug;

use super::{persist, SessionCommandError};
use crate::domain::script::{Callout, Screen};
use crate::domain::session::{FeedbackSession, ScreenPosition};
use crate::ports::SnapshotStorage;

/// Navigation request from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCommand {
    Next,
    Prev,
    /// Jump to a step number; clamped into `1..=15`.
    JumpToStep(i32),
    /// Drop profile and progress and return to intake.
    Restart,
}

/// Where the session landed.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationResult {
    pub position: ScreenPosition,
    pub screen: Screen,
    /// Resolved callout when the new screen is a step.
    pub callout: Option<Callout>,
}

/// Handler for navigation commands.
pub struct NavigateHandler {
    storage: Arc<dyn SnapshotStorage>,
}

impl NavigateHandler {
    pub fn new(storage: Arc<dyn SnapshotStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(
        &self,
        session: &mut FeedbackSession,
        cmd: NavigationCommand,
    ) -> Result<NavigationResult, SessionCommandError> {
        let from = session.position();

        match cmd {
            NavigationCommand::Next => session.move_to(from.next()),
            NavigationCommand::Prev => session.move_to(from.prev()),
            NavigationCommand::JumpToStep(number) => {
                session.move_to(ScreenPosition::jump_to_step(number))
            }
            NavigationCommand::Restart => session.restart(),
        }

        persist(self.storage.as_ref(), session).await?;

        let position = session.position();
        debug!(
            session_id = %session.id(),
            command = ?cmd,
            from = from.index(),
            to = position.index(),
            "Navigated"
        );

        Ok(NavigationResult {
            position,
            screen: position.screen(),
            callout: session.current_callout(),
        })
    }
}
