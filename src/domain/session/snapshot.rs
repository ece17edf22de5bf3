//! Raw session snapshot: the three independently persisted slots.

use serde::{Deserialize, Serialize};

/// One persisted slot of session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotSlot {
    /// Current screen index, as integer text.
    CurrentScreen,
    /// Extracted profile, as a JSON object.
    ProfileData,
    /// Visited step numbers, as a JSON array of integers.
    VisitedScreens,
}

impl SnapshotSlot {
    pub const ALL: [SnapshotSlot; 3] = [
        SnapshotSlot::CurrentScreen,
        SnapshotSlot::ProfileData,
        SnapshotSlot::VisitedScreens,
    ];

    /// Storage key of the slot.
    pub fn key(&self) -> &'static str {
        match self {
            SnapshotSlot::CurrentScreen => "essentia_current_screen",
            SnapshotSlot::ProfileData => "essentia_profile_data",
            SnapshotSlot::VisitedScreens => "essentia_visited_screens",
        }
    }
}

impl std::fmt::Display for SnapshotSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Unparsed slot contents. Any slot may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub current_screen: Option<String>,
    pub profile_data: Option<String>,
    pub visited_screens: Option<String>,
}

impl SessionSnapshot {
    pub fn get(&self, slot: SnapshotSlot) -> Option<&str> {
        match slot {
            SnapshotSlot::CurrentScreen => self.current_screen.as_deref(),
            SnapshotSlot::ProfileData => self.profile_data.as_deref(),
            SnapshotSlot::VisitedScreens => self.visited_screens.as_deref(),
        }
    }

    pub fn set(&mut self, slot: SnapshotSlot, value: Option<String>) {
        match slot {
            SnapshotSlot::CurrentScreen => self.current_screen = value,
            SnapshotSlot::ProfileData => self.profile_data = value,
            SnapshotSlot::VisitedScreens => self.visited_screens = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        SnapshotSlot::ALL.iter().all(|slot| self.get(*slot).is_none())
    }
}
