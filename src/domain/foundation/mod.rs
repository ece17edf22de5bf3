//! Foundation module - Shared domain primitives.
//!
//! Identifiers and error types that form the vocabulary of a
//! feedback session.

mod errors;
mod ids;

pub use errors::ValidationError;
pub use ids::SessionId;
