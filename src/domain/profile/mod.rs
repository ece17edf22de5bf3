//! Identity profile - the structured result of reading the four assessment reports.
//!
//! The profile is produced once per session by the extraction contract and
//! held immutably afterwards. Everything downstream (step callouts, the
//! overview screen) only derives projections from it.

mod disc;
mod identity;
mod overview;

pub use disc::{DiscIndices, DiscProfile, FactorSet, PieSlice, TowerChart};
pub use identity::{
    AnchorItem, IdentityProfile, StrengthInventory, StrengthItem, ValueLanguageItem, TOP_STRENGTHS,
};
pub use overview::{OverviewAlerts, ProfileOverview};
