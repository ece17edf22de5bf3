//! Domain layer containing the feedback-session model.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, validation errors)
//! - `profile` - Identity profile extracted from the assessment reports
//! - `script` - The fixed step script, screen sequencing and callout resolution
//! - `session` - Session context, navigation position and persisted snapshot

pub mod foundation;
pub mod profile;
pub mod script;
pub mod session;
