//! FeedbackSession - explicit context threaded through every session operation.
//!
//! Holds the wizard position, the extracted profile (shared, never mutated)
//! and the steps visited so far. Restoring from a snapshot is tolerant:
//! a corrupt slot is logged and treated as absent.

use std::sync::Arc;

use tracing::warn;

use super::{ScreenPosition, SessionSnapshot, SnapshotSlot};
use crate::domain::foundation::SessionId;
use crate::domain::profile::{IdentityProfile, ProfileOverview};
use crate::domain::script::{resolve_display, Callout, StepData, StepSequence, STEP_COUNT};

/// One consultant's walk through the feedback script.
///
/// # Invariants
///
/// - `visited` holds step numbers in `1..=15`, without duplicates, in
///   first-visit order
/// - the profile is replaced wholesale or cleared, never edited
#[derive(Debug, Clone)]
pub struct FeedbackSession {
    id: SessionId,
    position: ScreenPosition,
    profile: Option<Arc<IdentityProfile>>,
    visited: Vec<u8>,
}

impl FeedbackSession {
    /// A fresh session on the intake screen.
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            position: ScreenPosition::intake(),
            profile: None,
            visited: Vec::new(),
        }
    }

    /// Rebuilds a session from persisted slots.
    pub fn from_snapshot(id: SessionId, snapshot: &SessionSnapshot) -> Self {
        let position = snapshot
            .current_screen
            .as_deref()
            .and_then(|raw| match raw.trim().parse::<i32>() {
                Ok(index) => Some(ScreenPosition::from_index(index)),
                Err(_) => {
                    warn!(slot = %SnapshotSlot::CurrentScreen, "Ignoring corrupt snapshot slot");
                    None
                }
            })
            .unwrap_or_default();

        let profile = snapshot
            .profile_data
            .as_deref()
            .and_then(|raw| match serde_json::from_str::<IdentityProfile>(raw) {
                Ok(profile) => Some(Arc::new(profile)),
                Err(e) => {
                    warn!(slot = %SnapshotSlot::ProfileData, error = %e, "Ignoring corrupt snapshot slot");
                    None
                }
            });

        let visited = snapshot
            .visited_screens
            .as_deref()
            .and_then(|raw| match serde_json::from_str::<Vec<i64>>(raw) {
                Ok(numbers) => Some(numbers),
                Err(e) => {
                    warn!(slot = %SnapshotSlot::VisitedScreens, error = %e, "Ignoring corrupt snapshot slot");
                    None
                }
            })
            .unwrap_or_default();

        let mut session = Self {
            id,
            position,
            profile,
            visited: Vec::new(),
        };
        for number in visited {
            if (1..=STEP_COUNT as i64).contains(&number) {
                session.record_visit(number as u8);
            }
        }
        session.record_current();
        session
    }

    /// Serializes the session back into its three slots.
    ///
    /// An absent profile yields an absent profile slot.
    pub fn to_snapshot(&self) -> Result<SessionSnapshot, serde_json::Error> {
        let profile_data = self
            .profile
            .as_deref()
            .map(serde_json::to_string)
            .transpose()?;

        Ok(SessionSnapshot {
            current_screen: Some(self.position.index().to_string()),
            profile_data,
            visited_screens: Some(serde_json::to_string(&self.visited)?),
        })
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn position(&self) -> ScreenPosition {
        self.position
    }

    pub fn profile(&self) -> Option<&IdentityProfile> {
        self.profile.as_deref()
    }

    /// Shared handle to the profile, for callers that outlive the session borrow.
    pub fn shared_profile(&self) -> Option<Arc<IdentityProfile>> {
        self.profile.clone()
    }

    pub fn has_profile(&self) -> bool {
        self.profile.is_some()
    }

    /// Visited step numbers in first-visit order.
    pub fn visited(&self) -> &[u8] {
        &self.visited
    }

    pub fn has_visited(&self, step_number: u8) -> bool {
        self.visited.contains(&step_number)
    }

    pub fn set_profile(&mut self, profile: IdentityProfile) {
        self.profile = Some(Arc::new(profile));
    }

    pub fn clear_profile(&mut self) {
        self.profile = None;
    }

    /// Moves to a new position, recording the step as visited if it is one.
    pub fn move_to(&mut self, position: ScreenPosition) {
        self.position = position;
        self.record_current();
    }

    /// Clears profile and visited steps and returns to intake.
    pub fn restart(&mut self) {
        self.profile = None;
        self.visited.clear();
        self.position = ScreenPosition::restart();
    }

    /// The step on screen, if the current screen is a step.
    pub fn current_step(&self) -> Option<&'static StepData> {
        self.position.step_number().and_then(StepSequence::step)
    }

    /// The resolved callout of the step on screen.
    pub fn current_callout(&self) -> Option<Callout> {
        self.current_step()
            .map(|step| resolve_display(step, self.profile()))
    }

    /// Overview projection, available once a profile is held.
    pub fn overview(&self) -> Option<ProfileOverview> {
        self.profile().map(ProfileOverview::from_profile)
    }

    fn record_current(&mut self) {
        if let Some(number) = self.position.step_number() {
            self.record_visit(number);
        }
    }

    fn record_visit(&mut self, number: u8) {
        if !self.visited.contains(&number) {
            self.visited.push(number);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::test_support::reference_profile;
    use crate::domain::script::{Readout, Status};

    fn session() -> FeedbackSession {
        FeedbackSession::new(SessionId::new())
    }

    #[test]
    fn new_session_is_blank() {
        let session = session();
        assert_eq!(session.position(), ScreenPosition::intake());
        assert!(!session.has_profile());
        assert!(session.visited().is_empty());
        assert!(session.current_step().is_none());
        assert!(session.overview().is_none());
    }

    #[test]
    fn entering_steps_records_first_visit_order() {
        let mut session = session();
        session.move_to(ScreenPosition::jump_to_step(3));
        session.move_to(ScreenPosition::jump_to_step(1));
        session.move_to(ScreenPosition::jump_to_step(3));
        session.move_to(ScreenPosition::overview());
        assert_eq!(session.visited(), &[3, 1]);
        assert!(session.has_visited(1));
        assert!(!session.has_visited(2));
    }

    #[test]
    fn current_callout_uses_profile() {
        let mut session = session();
        session.set_profile(reference_profile());
        session.move_to(ScreenPosition::jump_to_step(4));
        assert_eq!(
            session.current_callout(),
            Some(Callout::Readout(Readout { value: "15".to_string(), status: Status::Neutro }))
        );
    }

    #[test]
    fn restart_clears_everything() {
        let mut session = session();
        session.set_profile(reference_profile());
        session.move_to(ScreenPosition::jump_to_step(7));
        session.restart();
        assert_eq!(session.position(), ScreenPosition::intake());
        assert!(!session.has_profile());
        assert!(session.visited().is_empty());
    }

    #[test]
    fn snapshot_round_trip_preserves_state() {
        let mut session = session();
        session.set_profile(reference_profile());
        session.move_to(ScreenPosition::jump_to_step(2));
        session.move_to(ScreenPosition::jump_to_step(5));

        let snapshot = session.to_snapshot().unwrap();
        assert_eq!(snapshot.current_screen.as_deref(), Some("6"));
        assert_eq!(snapshot.visited_screens.as_deref(), Some("[2,5]"));

        let restored = FeedbackSession::from_snapshot(session.id(), &snapshot);
        assert_eq!(restored.position(), session.position());
        assert_eq!(restored.visited(), session.visited());
        assert_eq!(restored.profile(), session.profile());
    }

    #[test]
    fn snapshot_without_profile_leaves_slot_absent() {
        let snapshot = session().to_snapshot().unwrap();
        assert_eq!(snapshot.profile_data, None);
        assert_eq!(snapshot.current_screen.as_deref(), Some("0"));
        assert_eq!(snapshot.visited_screens.as_deref(), Some("[]"));
    }

    #[test]
    fn empty_snapshot_restores_fresh_session() {
        let restored = FeedbackSession::from_snapshot(SessionId::new(), &SessionSnapshot::default());
        assert_eq!(restored.position(), ScreenPosition::intake());
        assert!(!restored.has_profile());
        assert!(restored.visited().is_empty());
    }

    #[test]
    fn corrupt_slots_are_ignored() {
        let snapshot = SessionSnapshot {
            current_screen: Some("not-a-number".to_string()),
            profile_data: Some("{\"disc\": 3}".to_string()),
            visited_screens: Some("[1, 2".to_string()),
        };
        let restored = FeedbackSession::from_snapshot(SessionId::new(), &snapshot);
        assert_eq!(restored.position(), ScreenPosition::intake());
        assert!(!restored.has_profile());
        assert!(restored.visited().is_empty());
    }

    #[test]
    fn restore_filters_out_of_range_visits_and_records_current_step() {
        let snapshot = SessionSnapshot {
            current_screen: Some(" 10 ".to_string()),
            profile_data: None,
            visited_screens: Some("[0, 3, 3, 16, -1, 2]".to_string()),
        };
        let restored = FeedbackSession::from_snapshot(SessionId::new(), &snapshot);
        assert_eq!(restored.position().step_number(), Some(9));
        assert_eq!(restored.visited(), &[3, 2, 9]);
    }

    #[test]
    fn restore_clamps_out_of_range_screen() {
        let snapshot = SessionSnapshot {
            current_screen: Some("99".to_string()),
            ..SessionSnapshot::default()
        };
        let restored = FeedbackSession::from_snapshot(SessionId::new(), &snapshot);
        assert_eq!(restored.position().index(), StepSequence::COMPLETION_SCREEN);
    }
}
