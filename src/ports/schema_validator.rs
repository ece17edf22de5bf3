//! Schema Validator Port - Structural validation of extraction responses.
//!
//! The extraction contract only hands out profiles whose raw JSON passed
//! this check. Adapters (like JsonSchemaValidator) provide the implementation.

use serde_json::Value;
use thiserror::Error;

/// Port for validating raw profile payloads.
///
/// # Contract
///
/// Implementations must:
/// - require every schema field, with the right JSON type
/// - reject numbers that are not finite or fall below a declared `minimum`
/// - accept empty arrays
/// - report field paths qualified from the root (e.g. `disc.indices.aem`)
///
/// # Usage
///
/// ```rust,ignore
/// let validator: &dyn ProfileSchemaValidator = get_validator();
///
/// validator.validate(&payload)?;
///
/// // Same schema the generative service is constrained with
/// let schema = validator.response_schema();
/// ```
pub trait ProfileSchemaValidator: Send + Sync {
    /// Validate a decoded payload against the profile schema.
    fn validate(&self, payload: &Value) -> Result<(), SchemaValidationError>;

    /// The response schema sent to the generative service.
    fn response_schema(&self) -> &Value;
}

/// Errors that can occur during schema validation.
///
/// # Security
///
/// These errors contain detailed information for debugging. When returning
/// errors to users, use `to_client_message()` to get sanitized versions.
#[derive(Debug, Clone, Error)]
pub enum SchemaValidationError {
    #[error("Missing required field: {field}")]
    MissingRequired { field: String },

    #[error("Invalid type for field {field}: expected {expected}, got {actual}")]
    InvalidType {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("Non-finite number in field {field}")]
    NonFiniteNumber { field: String },

    #[error("Field {field} is below the minimum of {minimum}")]
    BelowMinimum { field: String, minimum: f64 },

    #[error("Schema validation failed: {message}")]
    Generic { message: String },

    #[error("Validation errors: {0:?}")]
    Multiple(Vec<SchemaValidationError>),
}

impl SchemaValidationError {
    /// Convert to a user-safe error message.
    pub fn to_client_message(&self) -> String {
        match self {
            SchemaValidationError::MissingRequired { field } => {
                format!("Missing required field: {}", field)
            }
            SchemaValidationError::InvalidType { field, expected, .. } => {
                format!("Invalid type for field '{}': expected {}", field, expected)
            }
            SchemaValidationError::NonFiniteNumber { field } => {
                format!("Field '{}' must be a finite number", field)
            }
            SchemaValidationError::BelowMinimum { field, minimum } => {
                format!("Field '{}' must be at least {}", field, minimum)
            }
            SchemaValidationError::Generic { message } => {
                // Truncate potentially long messages
                if message.chars().count() > 100 {
                    let head: String = message.chars().take(97).collect();
                    format!("Validation failed: {}...", head)
                } else {
                    format!("Validation failed: {}", message)
                }
            }
            SchemaValidationError::Multiple(errors) => errors
                .first()
                .map(|e| e.to_client_message())
                .unwrap_or_else(|| "Validation failed".to_string()),
        }
    }

    /// Returns true if this error contains multiple validation failures.
    pub fn is_multiple(&self) -> bool {
        matches!(self, SchemaValidationError::Multiple(_))
    }

    /// Get the count of validation errors.
    pub fn error_count(&self) -> usize {
        match self {
            SchemaValidationError::Multiple(errors) => errors.len(),
            _ => 1,
        }
    }
}

impl PartialEq for SchemaValidationError {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
