//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod session;

pub use session::{
    ExtractProfileCommand, ExtractProfileHandler, ExtractProfileResult, ExtractionOutcome,
    NavigateHandler, NavigationCommand, NavigationResult, RestoreSessionHandler,
    SessionCommandError,
};
