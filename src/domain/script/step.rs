//! Step definitions: one fixed record per scripted screen.
//!
//! Field names on the wire follow the script's own vocabulary
//! (`ensina`/`faz`, `dado`/`valor`, `fale`/`pergunte`) so the embedded
//! script stays readable by the people who write it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ActionValue;

/// One of the four thematic phases that group the steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    I,
    II,
    III,
    IV,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::I, Phase::II, Phase::III, Phase::IV];

    /// Roman numeral label.
    pub fn numeral(&self) -> &'static str {
        match self {
            Phase::I => "I",
            Phase::II => "II",
            Phase::III => "III",
            Phase::IV => "IV",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Phase::I => "Conexão e Perfil Básico",
            Phase::II => "Diagnóstico de Estresse e Desempenho",
            Phase::III => "Identidade, Autoestima e Autocrítica",
            Phase::IV => "Transformação e Encerramento",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.numeral())
    }
}

/// Tone of a step's data callout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Neutro,
    Alerta,
    Positivo,
}

impl Status {
    /// Color classes the presentation layer applies to the callout.
    pub fn css_class(&self) -> &'static str {
        match self {
            Status::Alerta => "text-amber-400 border-amber-500/50 bg-amber-500/10",
            Status::Positivo => "text-emerald-400 border-emerald-500/50 bg-emerald-500/10",
            Status::Neutro => "text-paper border-paper-accent/30 bg-white/5",
        }
    }
}

/// Which chart or diagram accompanies the teaching block.
///
/// Opaque to the core; the presentation layer decides how to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisualAid {
    DiscCards,
    PerformanceMap,
    MapOverlay,
    SmartDiagram,
    PieChart,
    TowerChart,
    ComparisonTable,
    AnchorsList,
    None,
}

/// What the consultant teaches on this step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeachBlock {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "explicacao")]
    pub explanation: String,
    #[serde(rename = "comoInterpretar")]
    pub interpretation: Vec<String>,
    #[serde(rename = "visualAid", default, skip_serializing_if = "Option::is_none")]
    pub visual_aid: Option<VisualAid>,
}

/// What the consultant does on this step: the data callout and the script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionBlock {
    #[serde(rename = "dado")]
    pub label: String,
    #[serde(rename = "valor")]
    pub value: ActionValue,
    pub status: Status,
    #[serde(rename = "fale")]
    pub say: String,
    #[serde(rename = "pergunte")]
    pub ask: String,
    #[serde(rename = "atencao", default, skip_serializing_if = "Option::is_none")]
    pub caution: Option<String>,
}

/// One of the fifteen fixed steps of the feedback session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepData {
    /// 1-based step number.
    pub id: u8,
    #[serde(rename = "fase")]
    pub phase: Phase,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "ensina")]
    pub teach: TeachBlock,
    #[serde(rename = "faz")]
    pub action: ActionBlock,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Alerta).unwrap(), "\"alerta\"");
        assert_eq!(
            serde_json::from_str::<Status>("\"positivo\"").unwrap(),
            Status::Positivo
        );
    }

    #[test]
    fn status_css_classes_are_distinct() {
        assert!(Status::Alerta.css_class().contains("amber"));
        assert!(Status::Positivo.css_class().contains("emerald"));
        assert!(Status::Neutro.css_class().contains("paper"));
    }

    #[test]
    fn visual_aid_uses_kebab_case() {
        assert_eq!(
            serde_json::from_str::<VisualAid>("\"comparison-table\"").unwrap(),
            VisualAid::ComparisonTable
        );
        assert_eq!(serde_json::to_string(&VisualAid::None).unwrap(), "\"none\"");
    }

    #[test]
    fn phases_are_ordered() {
        assert!(Phase::I < Phase::II);
        assert!(Phase::III < Phase::IV);
        assert_eq!(Phase::ALL.len(), 4);
        assert_eq!(Phase::IV.to_string(), "IV");
    }

    #[test]
    fn step_parses_from_script_vocabulary() {
        let yaml = r#"
id: 7
fase: "II"
titulo: "Índice A.P.F."
ensina:
  titulo: "Aproveitamento Pessoal"
  explicacao: "Tração na carreira."
  comoInterpretar:
    - "Baixo (<30): Subutilização."
faz:
  dado: "Nível de Tração"
  valor: DYNAMIC_APF
  status: positivo
  fale: "Este número indica..."
  pergunte: "Você sente que..."
"#;
        let step: StepData = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(step.id, 7);
        assert_eq!(step.phase, Phase::II);
        assert_eq!(step.teach.visual_aid, None);
        assert_eq!(step.action.status, Status::Positivo);
        assert_eq!(step.action.caution, None);
    }
}
