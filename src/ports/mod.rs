//! Ports - Interfaces between the domain and the outside world.
//!
//! # Ports
//!
//! - `ProfileExtractor` - Turns uploaded reports into an identity profile
//! - `ProfileSchemaValidator` - Structural validation of extraction payloads
//! - `SnapshotStorage` - Persistence of the session snapshot slots

mod profile_extractor;
mod schema_validator;
mod snapshot_storage;

pub use profile_extractor::{
    DocumentLabel, DocumentSet, ExtractionCause, ExtractionFailed, ExtractorInfo,
    ProfileExtractor, SourceDocument, PDF_MEDIA_TYPE,
};
pub use schema_validator::{ProfileSchemaValidator, SchemaValidationError};
pub use snapshot_storage::{SnapshotStorage, SnapshotStorageError};
