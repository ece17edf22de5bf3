//! Shared decode pipeline for extraction responses.
//!
//! parse text → validate against the response schema → deserialize.
//! Deserializing a profile recomputes `strengths.top5` from `strengths.all`,
//! so whatever the payload carried there is discarded.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::adapters::validation::JsonSchemaValidator;
use crate::domain::profile::IdentityProfile;
use crate::ports::{ExtractionFailed, ProfileSchemaValidator};

/// Decodes raw model output into a validated profile.
#[derive(Clone)]
pub struct ProfileDecoder {
    validator: Arc<dyn ProfileSchemaValidator>,
}

impl Default for ProfileDecoder {
    fn default() -> Self {
        Self::new(Arc::new(JsonSchemaValidator::new()))
    }
}

impl ProfileDecoder {
    pub fn new(validator: Arc<dyn ProfileSchemaValidator>) -> Self {
        Self { validator }
    }

    /// The schema the generative service must answer with.
    pub fn response_schema(&self) -> &Value {
        self.validator.response_schema()
    }

    /// Decodes response text.
    pub fn decode_str(&self, text: &str) -> Result<IdentityProfile, ExtractionFailed> {
        let payload: Value = serde_json::from_str(strip_code_fence(text)).map_err(|e| {
            warn!(error = %e, "Extraction response is not JSON");
            ExtractionFailed::invalid_response(format!("response is not JSON: {}", e))
        })?;
        self.decode_value(payload)
    }

    /// Decodes an already parsed payload.
    pub fn decode_value(&self, payload: Value) -> Result<IdentityProfile, ExtractionFailed> {
        if let Err(e) = self.validator.validate(&payload) {
            warn!(errors = e.error_count(), error = %e, "Extraction response failed schema validation");
            return Err(e.into());
        }

        let profile: IdentityProfile = serde_json::from_value(payload).map_err(|e| {
            warn!(error = %e, "Extraction response did not deserialize");
            ExtractionFailed::invalid_response(e.to_string())
        })?;

        debug!(
            anchors = profile.anchors.len(),
            strengths = profile.strengths.all().len(),
            "Decoded extraction response"
        );
        Ok(profile)
    }
}

/// Removes a surrounding Markdown code fence, if any.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}
