//! The identity profile aggregate and its ranked collections.

use serde::{de, Deserialize, Deserializer, Serialize};

use super::DiscProfile;

/// Number of leading strengths surfaced as the "top" strengths.
pub const TOP_STRENGTHS: usize = 5;

/// A ranked career anchor (motivational driver).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorItem {
    pub name: String,
    pub score: f64,
    /// Dense 1-based rank, consistent with descending score.
    #[serde(deserialize_with = "deserialize_rank")]
    pub rank: u32,
}

/// A ranked character strength from the VIA inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthItem {
    pub name: String,
    pub score: f64,
    #[serde(deserialize_with = "deserialize_rank")]
    pub rank: u32,
}

/// Full ranked strength inventory plus its leading slice.
///
/// `top5` is never populated independently: it is always the first
/// [`TOP_STRENGTHS`] entries of `all`, recomputed on construction and on
/// every deserialization. Any `top5` present in incoming data is discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawStrengthInventory", into = "RawStrengthInventory")]
pub struct StrengthInventory {
    all: Vec<StrengthItem>,
    top5: Vec<StrengthItem>,
}

impl StrengthInventory {
    pub fn new(all: Vec<StrengthItem>) -> Self {
        let top5 = all.iter().take(TOP_STRENGTHS).cloned().collect();
        Self { all, top5 }
    }

    pub fn all(&self) -> &[StrengthItem] {
        &self.all
    }

    pub fn top5(&self) -> &[StrengthItem] {
        &self.top5
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

#[derive(Serialize, Deserialize)]
struct RawStrengthInventory {
    all: Vec<StrengthItem>,
    #[serde(default)]
    top5: Vec<StrengthItem>,
}

impl From<RawStrengthInventory> for StrengthInventory {
    fn from(raw: RawStrengthInventory) -> Self {
        Self::new(raw.all)
    }
}

impl From<StrengthInventory> for RawStrengthInventory {
    fn from(inventory: StrengthInventory) -> Self {
        Self {
            all: inventory.all,
            top5: inventory.top5,
        }
    }
}

/// A ranked valuation language with separate work and home scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueLanguageItem {
    pub language: String,
    pub score_work: f64,
    pub score_home: f64,
}

/// Everything extracted from the four assessment reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityProfile {
    pub disc: DiscProfile,
    pub anchors: Vec<AnchorItem>,
    pub strengths: StrengthInventory,
    pub values: Vec<ValueLanguageItem>,
    pub summary: String,
}

impl IdentityProfile {
    /// The highest-ranked career anchor, if any anchors were extracted.
    pub fn primary_anchor(&self) -> Option<&AnchorItem> {
        self.anchors.first()
    }

    /// The primary valuation language (first entry).
    pub fn primary_value_language(&self) -> Option<&ValueLanguageItem> {
        self.values.first()
    }
}

/// Ranks arrive as JSON numbers; accept any non-negative integral value.
fn deserialize_rank<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if raw.is_finite() && raw >= 0.0 && raw.fract() == 0.0 && raw <= f64::from(u32::MAX) {
        Ok(raw as u32)
    } else {
        Err(de::Error::custom(format!(
            "rank must be a non-negative integer, got {}",
            raw
        )))
    }
}
