//! The `valor` of a step's callout: a literal, or a keyword token.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const DYNAMIC_PREFIX: &str = "DYNAMIC_";
const INTERACTIVE_PREFIX: &str = "INTERACTIVE_";

/// Tokens whose display value is computed from the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DynamicToken {
    Dominant,
    Aem,
    Apf,
    Ips,
    Ida,
    Ipm,
    Anchors,
    TowerAnalysis,
    Gap,
    Balance,
}

impl DynamicToken {
    pub const ALL: [DynamicToken; 10] = [
        DynamicToken::Dominant,
        DynamicToken::Aem,
        DynamicToken::Apf,
        DynamicToken::Ips,
        DynamicToken::Ida,
        DynamicToken::Ipm,
        DynamicToken::Anchors,
        DynamicToken::TowerAnalysis,
        DynamicToken::Gap,
        DynamicToken::Balance,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            DynamicToken::Dominant => "DYNAMIC_DOMINANT",
            DynamicToken::Aem => "DYNAMIC_AEM",
            DynamicToken::Apf => "DYNAMIC_APF",
            DynamicToken::Ips => "DYNAMIC_IPS",
            DynamicToken::Ida => "DYNAMIC_IDA",
            DynamicToken::Ipm => "DYNAMIC_IPM",
            DynamicToken::Anchors => "DYNAMIC_ANCHORS",
            DynamicToken::TowerAnalysis => "DYNAMIC_TOWER_ANALYSIS",
            DynamicToken::Gap => "DYNAMIC_GAP",
            DynamicToken::Balance => "DYNAMIC_BALANCE",
        }
    }
}

/// Tokens that hand the callout over to an interactive input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractiveKind {
    Selection,
    Smart,
    Closing,
}

impl InteractiveKind {
    pub const ALL: [InteractiveKind; 3] = [
        InteractiveKind::Selection,
        InteractiveKind::Smart,
        InteractiveKind::Closing,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            InteractiveKind::Selection => "INTERACTIVE_SELECTION",
            InteractiveKind::Smart => "INTERACTIVE_SMART",
            InteractiveKind::Closing => "INTERACTIVE_CLOSING",
        }
    }
}

/// A keyword-shaped `valor` that names no known token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown callout token: {0}")]
pub struct UnknownToken(pub String);

/// Parsed callout value.
///
/// Anything carrying the `DYNAMIC_` or `INTERACTIVE_` prefix must be a
/// recognized token; everything else is a literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ActionValue {
    Literal(String),
    Dynamic(DynamicToken),
    Interactive(InteractiveKind),
}

impl ActionValue {
    /// The raw `valor` text as written in the script.
    pub fn as_str(&self) -> &str {
        match self {
            ActionValue::Literal(text) => text,
            ActionValue::Dynamic(token) => token.keyword(),
            ActionValue::Interactive(kind) => kind.keyword(),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, ActionValue::Literal(_))
    }
}

impl FromStr for ActionValue {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with(DYNAMIC_PREFIX) {
            return DynamicToken::ALL
                .iter()
                .find(|token| token.keyword() == s)
                .map(|token| ActionValue::Dynamic(*token))
                .ok_or_else(|| UnknownToken(s.to_string()));
        }
        if s.starts_with(INTERACTIVE_PREFIX) {
            return InteractiveKind::ALL
                .iter()
                .find(|kind| kind.keyword() == s)
                .map(|kind| ActionValue::Interactive(*kind))
                .ok_or_else(|| UnknownToken(s.to_string()));
        }
        Ok(ActionValue::Literal(s.to_string()))
    }
}

impl TryFrom<String> for ActionValue {
    type Error = UnknownToken;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ActionValue> for String {
    fn from(value: ActionValue) -> Self {
        match value {
            ActionValue::Literal(text) => text,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for ActionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
