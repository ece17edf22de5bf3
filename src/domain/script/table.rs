//! The embedded step script.
//!
//! The fifteen steps are compiled into the binary from `steps.yaml`, parsed
//! once on first use and never mutated afterwards.

use once_cell::sync::Lazy;
use thiserror::Error;

use super::StepData;

/// Number of scripted steps.
pub const STEP_COUNT: usize = 15;

const EMBEDDED_SCRIPT: &str = include_str!("steps.yaml");

/// Errors in a step script source.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("step script is not valid: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("step script must contain {expected} steps, found {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("step at position {position} has id {id}")]
    OutOfOrder { position: usize, id: u8 },
}

/// Parses and checks a step script: exactly [`STEP_COUNT`] steps, numbered
/// 1 through 15 in order.
pub fn parse_script(source: &str) -> Result<Vec<StepData>, ScriptError> {
    let steps: Vec<StepData> = serde_yaml::from_str(source)?;

    if steps.len() != STEP_COUNT {
        return Err(ScriptError::WrongLength {
            expected: STEP_COUNT,
            actual: steps.len(),
        });
    }

    for (index, step) in steps.iter().enumerate() {
        if usize::from(step.id) != index + 1 {
            return Err(ScriptError::OutOfOrder {
                position: index + 1,
                id: step.id,
            });
        }
    }

    Ok(steps)
}

static STEPS: Lazy<Vec<StepData>> = Lazy::new(|| {
    parse_script(EMBEDDED_SCRIPT)
        .unwrap_or_else(|e| panic!("embedded step script is invalid: {}", e))
});

/// All steps in script order.
pub fn steps() -> &'static [StepData] {
    &STEPS
}
