//! Callout resolution: projecting profile fields into a step's data callout.

use serde::Serialize;

use super::{ActionValue, DynamicToken, InteractiveKind, Status, StepData};
use crate::domain::profile::IdentityProfile;

/// A.E.M. above this value is an alert.
const AEM_ALERT_ABOVE: f64 = 60.0;
/// A.P.F. below this value is an alert.
const APF_ALERT_BELOW: f64 = 30.0;
/// I.P.S. below this value is an alert. Lower is worse for this index.
const IPS_ALERT_BELOW: f64 = 85.0;

const TOWER_ANALYSIS_LABEL: &str = "Em Análise";
const GAP_LABEL: &str = "Alto";
const BALANCE_LABEL: &str = "Equilibrado";
const EMPTY_ANCHORS: &str = "-";

/// Improvement points offered when no profile has been extracted yet.
const FALLBACK_LIMITATIONS: [&str; 4] = [
    "Impaciência",
    "Baixa Escuta",
    "Centralização",
    "Resistência a Mudança",
];

/// Fields of the S.M.A.R.T. commitment form.
pub const SMART_FIELDS: [&str; 5] = ["Específico", "Mensurável", "Atingível", "Relevante", "Temporal"];

/// A resolved value readout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Readout {
    pub value: String,
    pub status: Status,
}

impl Readout {
    pub fn css_class(&self) -> &'static str {
        self.status.css_class()
    }
}

/// Interactive input the presentation layer renders instead of a readout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum InteractivePrompt {
    /// Pick exactly one improvement point.
    Selection { options: Vec<String> },
    /// Fill in a S.M.A.R.T. commitment.
    Smart { fields: Vec<String> },
    /// Free-text closing statement.
    Closing,
}

/// What a step's callout shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Callout {
    Readout(Readout),
    Interactive(InteractivePrompt),
}

impl Callout {
    /// The readout, if this callout is not interactive.
    pub fn readout(&self) -> Option<&Readout> {
        match self {
            Callout::Readout(readout) => Some(readout),
            Callout::Interactive(_) => None,
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, Callout::Interactive(_))
    }
}

/// Resolves a step's callout against an optional profile.
///
/// Without a profile, the step's literal `valor` and `status` pass through
/// (dynamic tokens show their raw keyword). Interactive tokens always yield
/// an interactive prompt. Never fails.
pub fn resolve_display(step: &StepData, profile: Option<&IdentityProfile>) -> Callout {
    let declared = step.action.status;

    match (&step.action.value, profile) {
        (ActionValue::Interactive(kind), _) => Callout::Interactive(interactive_prompt(*kind, profile)),
        (ActionValue::Dynamic(token), Some(profile)) => {
            Callout::Readout(resolve_token(*token, declared, profile))
        }
        (value, _) => Callout::Readout(Readout {
            value: value.as_str().to_string(),
            status: declared,
        }),
    }
}

fn resolve_token(token: DynamicToken, declared: Status, profile: &IdentityProfile) -> Readout {
    let indices = &profile.disc.indices;

    let (value, status) = match token {
        DynamicToken::Dominant => (profile.disc.primary_profile().to_string(), declared),
        DynamicToken::Aem => (
            canonical_number(indices.aem),
            if indices.aem > AEM_ALERT_ABOVE {
                Status::Alerta
            } else {
                Status::Neutro
            },
        ),
        DynamicToken::Apf => (
            canonical_number(indices.apf),
            if indices.apf < APF_ALERT_BELOW {
                Status::Alerta
            } else {
                Status::Positivo
            },
        ),
        DynamicToken::Ips => (
            format!("{}%", canonical_number(indices.ips)),
            if indices.ips < IPS_ALERT_BELOW {
                Status::Alerta
            } else {
                declared
            },
        ),
        DynamicToken::Ida => (canonical_number(indices.ida), declared),
        DynamicToken::Ipm => (canonical_number(indices.ipm), declared),
        DynamicToken::Anchors => (
            profile
                .primary_anchor()
                .map(|anchor| anchor.name.clone())
                .unwrap_or_else(|| EMPTY_ANCHORS.to_string()),
            declared,
        ),
        DynamicToken::TowerAnalysis => (TOWER_ANALYSIS_LABEL.to_string(), declared),
        DynamicToken::Gap => (GAP_LABEL.to_string(), declared),
        DynamicToken::Balance => (BALANCE_LABEL.to_string(), declared),
    };

    Readout { value, status }
}

fn interactive_prompt(kind: InteractiveKind, profile: Option<&IdentityProfile>) -> InteractivePrompt {
    match kind {
        InteractiveKind::Selection => InteractivePrompt::Selection {
            options: match profile {
                Some(profile) => profile.disc.limitations.clone(),
                None => FALLBACK_LIMITATIONS.iter().map(|s| s.to_string()).collect(),
            },
        },
        InteractiveKind::Smart => InteractivePrompt::Smart {
            fields: SMART_FIELDS.iter().map(|s| s.to_string()).collect(),
        },
        InteractiveKind::Closing => InteractivePrompt::Closing,
    }
}

/// Shortest decimal form of a number: `75.0` prints as `75`, `55.5` as `55.5`.
fn canonical_number(value: f64) -> String {
    if value == 0.0 {
        // avoids "-0"
        return "0".to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::test_support::reference_profile;
    use crate::domain::script::StepSequence;

    fn step(number: u8) -> &'static StepData {
        StepSequence::step(number).unwrap()
    }

    fn readout(number: u8, profile: Option<&IdentityProfile>) -> Readout {
        resolve_display(step(number), profile).readout().cloned().unwrap()
    }

    #[test]
    fn high_aem_raises_alert() {
        let mut profile = reference_profile();
        profile.disc.indices.aem = 75.0;
        assert_eq!(
            readout(4, Some(&profile)),
            Readout { value: "75".to_string(), status: Status::Alerta }
        );
    }

    #[test]
    fn moderate_aem_is_neutral_even_though_step_declares_alert() {
        let mut profile = reference_profile();
        profile.disc.indices.aem = 60.0;
        assert_eq!(
            readout(4, Some(&profile)),
            Readout { value: "60".to_string(), status: Status::Neutro }
        );
    }

    #[test]
    fn low_apf_raises_alert_otherwise_positive() {
        let mut profile = reference_profile();
        profile.disc.indices.apf = 29.5;
        assert_eq!(readout(7, Some(&profile)).status, Status::Alerta);
        assert_eq!(readout(7, Some(&profile)).value, "29.5");

        profile.disc.indices.apf = 30.0;
        assert_eq!(readout(7, Some(&profile)).status, Status::Positivo);
    }

    #[test]
    fn healthy_ips_keeps_declared_status() {
        let mut profile = reference_profile();
        profile.disc.indices.ips = 90.0;
        let resolved = readout(9, Some(&profile));
        assert_eq!(resolved.value, "90%");
        assert_eq!(resolved.status, step(9).action.status);
    }

    #[test]
    fn low_ips_raises_alert() {
        let mut profile = reference_profile();
        profile.disc.indices.ips = 84.9;
        assert_eq!(
            readout(9, Some(&profile)),
            Readout { value: "84.9%".to_string(), status: Status::Alerta }
        );
    }

    #[test]
    fn ida_and_ipm_render_as_text() {
        let profile = reference_profile();
        assert_eq!(readout(10, Some(&profile)).value, "12");
        assert_eq!(readout(12, Some(&profile)).value, "30");
        assert_eq!(readout(12, Some(&profile)).status, Status::Alerta);
    }

    #[test]
    fn dominant_uses_primary_profile_name() {
        let profile = reference_profile();
        assert_eq!(readout(2, Some(&profile)).value, "Executor");
    }

    #[test]
    fn anchors_show_top_anchor() {
        let profile = reference_profile();
        assert_eq!(readout(8, Some(&profile)).value, "Autonomia e Independência");
    }

    #[test]
    fn empty_anchors_show_dash() {
        let mut profile = reference_profile();
        profile.anchors.clear();
        assert_eq!(readout(8, Some(&profile)).value, "-");
    }

    #[test]
    fn placeholder_tokens_use_fixed_labels() {
        let profile = reference_profile();
        assert_eq!(readout(3, Some(&profile)).value, "Em Análise");
        assert_eq!(readout(6, Some(&profile)).value, "Alto");
        assert_eq!(readout(11, Some(&profile)).value, "Equilibrado");
        assert_eq!(readout(11, Some(&profile)).status, Status::Alerta);
    }

    #[test]
    fn literals_pass_through_with_or_without_profile() {
        let profile = reference_profile();
        for number in [1, 5] {
            let declared = &step(number).action;
            for candidate in [None, Some(&profile)] {
                let resolved = readout(number, candidate);
                assert_eq!(resolved.value, declared.value.as_str());
                assert_eq!(resolved.status, declared.status);
            }
        }
    }

    #[test]
    fn dynamic_tokens_without_profile_show_raw_keyword() {
        let resolved = readout(4, None);
        assert_eq!(resolved.value, "DYNAMIC_AEM");
        assert_eq!(resolved.status, Status::Alerta);
    }

    #[test]
    fn selection_offers_profile_limitations() {
        let profile = reference_profile();
        assert_eq!(
            resolve_display(step(13), Some(&profile)),
            Callout::Interactive(InteractivePrompt::Selection {
                options: vec![
                    "Impaciência".to_string(),
                    "Baixa Escuta".to_string(),
                    "Centralização".to_string(),
                ],
            })
        );
    }

    #[test]
    fn selection_without_profile_offers_fallback_list() {
        match resolve_display(step(13), None) {
            Callout::Interactive(InteractivePrompt::Selection { options }) => {
                assert_eq!(options.len(), 4);
                assert_eq!(options[3], "Resistência a Mudança");
            }
            other => panic!("expected selection prompt, got {:?}", other),
        }
    }

    #[test]
    fn smart_and_closing_are_interactive() {
        let smart = resolve_display(step(14), None);
        assert!(smart.is_interactive());
        assert!(smart.readout().is_none());
        assert_eq!(
            resolve_display(step(15), Some(&reference_profile())),
            Callout::Interactive(InteractivePrompt::Closing)
        );
    }

    #[test]
    fn canonical_number_drops_trailing_zero_fraction() {
        assert_eq!(canonical_number(75.0), "75");
        assert_eq!(canonical_number(55.5), "55.5");
        assert_eq!(canonical_number(-0.0), "0");
        assert_eq!(canonical_number(0.1), "0.1");
    }

    #[test]
    fn callout_serializes_with_type_tag() {
        let json = serde_json::to_value(readout(5, None)).unwrap();
        assert_eq!(json["value"], "Adaptado");
        assert_eq!(json["status"], "neutro");

        let callout = serde_json::to_value(resolve_display(step(15), None)).unwrap();
        assert_eq!(callout["type"], "interactive");
        assert_eq!(callout["widget"], "closing");
    }
}
