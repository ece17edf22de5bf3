//! The fixed fifteen-step feedback script and its callout resolution.
//!
//! Step content is static and embedded at compile time. Ordering and
//! screen-index arithmetic live in [`StepSequence`]; profile projection
//! into a step's callout lives in [`resolve_display`].

mod action_value;
mod display;
mod sequence;
mod step;
mod table;

pub use action_value::{ActionValue, DynamicToken, InteractiveKind, UnknownToken};
pub use display::{resolve_display, Callout, InteractivePrompt, Readout, SMART_FIELDS};
pub use sequence::{Screen, StepSequence};
pub use step::{ActionBlock, Phase, Status, StepData, TeachBlock, VisualAid};
pub use table::{parse_script, steps, ScriptError, STEP_COUNT};
