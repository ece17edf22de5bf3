//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Profile extractors (offline reference, live Gemini)
//! - `storage` - Snapshot storage (file, in-memory)
//! - `validation` - Response schema validation

pub mod ai;
pub mod storage;
pub mod validation;

pub use ai::{extractor_for, GeminiExtractor, ProfileDecoder, ReferenceExtractor};
pub use storage::{FileSnapshotStorage, InMemorySnapshotStorage};
pub use validation::JsonSchemaValidator;
