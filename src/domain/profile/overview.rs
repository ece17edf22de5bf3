//! Overview projection shown before the first step.

use serde::Serialize;

use super::{AnchorItem, IdentityProfile, StrengthItem, ValueLanguageItem};

/// I.P.S. above this value raises the situational-pressure alert.
const PRESSURE_ALERT_IPS: f64 = 50.0;

/// Natural/adapted D gap above this value raises the adaptation alert.
const ADAPTATION_ALERT_GAP: f64 = 15.0;

/// How many anchors and strengths the overview lists.
const OVERVIEW_HIGHLIGHTS: usize = 3;

/// Alerts raised on the overview screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OverviewAlerts {
    pub high_pressure: bool,
    pub high_adaptation: bool,
}

impl OverviewAlerts {
    pub fn any(&self) -> bool {
        self.high_pressure || self.high_adaptation
    }
}

/// Condensed, read-only view of a profile for the overview screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileOverview {
    pub dominant_label: String,
    pub primary_profile: String,
    pub primary_initial: Option<char>,
    /// Raw factor percentages in `d, i, s, c` order.
    pub factors: [f64; 4],
    pub top_anchors: Vec<AnchorItem>,
    pub top_strengths: Vec<StrengthItem>,
    pub primary_value_language: Option<ValueLanguageItem>,
    pub alerts: OverviewAlerts,
}

impl ProfileOverview {
    pub fn from_profile(profile: &IdentityProfile) -> Self {
        let disc = &profile.disc;
        let primary = disc.primary_profile().to_string();

        let alerts = OverviewAlerts {
            high_pressure: disc.indices.ips > PRESSURE_ALERT_IPS,
            high_adaptation: disc
                .tower_chart
                .map(|tower| tower.dominance_gap() > ADAPTATION_ALERT_GAP)
                .unwrap_or(false),
        };

        Self {
            dominant_label: disc.dominant_profile.clone(),
            primary_initial: primary.chars().next(),
            primary_profile: primary,
            factors: [disc.factors.d, disc.factors.i, disc.factors.s, disc.factors.c],
            top_anchors: profile
                .anchors
                .iter()
                .take(OVERVIEW_HIGHLIGHTS)
                .cloned()
                .collect(),
            top_strengths: profile
                .strengths
                .top5()
                .iter()
                .take(OVERVIEW_HIGHLIGHTS)
                .cloned()
                .collect(),
            primary_value_language: profile.primary_value_language().cloned(),
            alerts,
        }
    }
}
