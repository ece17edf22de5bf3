//! Session context: where the consultant is, what has been extracted, and
//! what has been visited.
//!
//! The core holds no global state. A [`FeedbackSession`] is passed to the
//! operations that need it; persistence goes through [`SessionSnapshot`].

mod feedback_session;
mod position;
mod snapshot;

pub use feedback_session::FeedbackSession;
pub use position::ScreenPosition;
pub use snapshot::{SessionSnapshot, SnapshotSlot};
