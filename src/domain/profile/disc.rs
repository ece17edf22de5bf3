//! DISC behavioral profile types.

use serde::{Deserialize, Serialize};

/// The four DISC factors: Dominance, Influence, Steadiness, Compliance.
///
/// Values are percentages of a single behavioral-energy budget. They need
/// not sum to exactly 100 and are read as proportional weights.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FactorSet {
    pub d: f64,
    pub i: f64,
    pub s: f64,
    pub c: f64,
}

impl FactorSet {
    pub fn new(d: f64, i: f64, s: f64, c: f64) -> Self {
        Self { d, i, s, c }
    }

    /// Sum of all four factors.
    pub fn total(&self) -> f64 {
        self.d + self.i + self.s + self.c
    }

    /// Factors rescaled to proportions of the total, in `d, i, s, c` order.
    ///
    /// An all-zero set yields all-zero shares.
    pub fn shares(&self) -> [f64; 4] {
        let total = self.total();
        if total <= 0.0 {
            return [0.0; 4];
        }
        [self.d / total, self.i / total, self.s / total, self.c / total]
    }
}

/// The five bounded DISC indices, each nominally in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DiscIndices {
    /// A.E.M. - perceived pressure to change who one is.
    pub aem: f64,
    /// A.P.F. - how much natural ability is being put to use.
    pub apf: f64,
    /// I.P.S. - selective positivity (professional self-esteem).
    pub ips: f64,
    /// I.D.A. - self-perception discrepancy.
    pub ida: f64,
    /// I.P.M. - intensity of the drive for self-improvement.
    pub ipm: f64,
}

/// One slice of the energy composition chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

/// Natural vs. adapted factor readings.
///
/// Both readings are always present together; a profile without tower data
/// carries no `TowerChart` at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TowerChart {
    pub natural: FactorSet,
    pub adapted: FactorSet,
}

impl TowerChart {
    /// Absolute natural-to-adapted gap on the D axis.
    pub fn dominance_gap(&self) -> f64 {
        (self.natural.d - self.adapted.d).abs()
    }
}

/// Behavioral section of the identity profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscProfile {
    pub factors: FactorSet,
    /// Conventionally `"<Primary>-<Secondary>"`, e.g. `"Executor-Comunicador"`.
    pub dominant_profile: String,
    pub indices: DiscIndices,
    pub strengths: Vec<String>,
    pub limitations: Vec<String>,
    pub pie_chart: Vec<PieSlice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tower_chart: Option<TowerChart>,
}

impl DiscProfile {
    /// The primary profile name: everything before the first `-`.
    pub fn primary_profile(&self) -> &str {
        self.dominant_profile
            .split_once('-')
            .map(|(primary, _)| primary)
            .unwrap_or(&self.dominant_profile)
    }
}
