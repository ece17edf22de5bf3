//! Validation Adapters - Schema validation implementations.
//!
//! Contains the adapter validating extraction payloads against the profile
//! response schema.

mod profile_schema_validator;

pub use profile_schema_validator::JsonSchemaValidator;
