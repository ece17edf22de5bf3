//! Profile Extractor Adapters.
//!
//! Implementations of the ProfileExtractor port.
//!
//! ## Available Adapters
//!
//! - `ReferenceExtractor` - Canonical fixture after a simulated latency
//! - `GeminiExtractor` - Live extraction through the Gemini API
//! - `ProfileDecoder` - Shared parse/validate/deserialize pipeline

mod decode;
mod gemini_extractor;
mod reference_extractor;

use std::sync::Arc;

use tracing::{info, warn};

pub use decode::ProfileDecoder;
pub use gemini_extractor::{GeminiConfig, GeminiExtractor, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
pub use reference_extractor::{ReferenceExtractor, DEFAULT_REFERENCE_LATENCY};

use crate::config::{AiConfig, AiProvider};
use crate::ports::{ExtractionFailed, ProfileExtractor};

/// Selects the extraction strategy for a session.
///
/// The live extractor is used only when Gemini is selected and a key is
/// configured; otherwise the reference extractor stands in.
///
/// # Errors
///
/// Returns `ExtractionFailed` with a network cause if the HTTP client
/// cannot be built.
pub fn extractor_for(config: &AiConfig) -> Result<Arc<dyn ProfileExtractor>, ExtractionFailed> {
    match (config.provider, config.gemini_api_key()) {
        (AiProvider::Gemini, Some(key)) => {
            let gemini = GeminiConfig::new(key)
                .with_model(config.model.clone())
                .with_base_url(config.base_url.clone())
                .with_timeout(config.timeout());
            let extractor = GeminiExtractor::new(gemini).map_err(|e| {
                ExtractionFailed::network(format!("failed to build HTTP client: {}", e))
            })?;
            info!(model = %config.model, "Using Gemini extractor");
            Ok(Arc::new(extractor))
        }
        (AiProvider::Gemini, None) => {
            warn!("Gemini selected without an API key; falling back to reference extractor");
            Ok(Arc::new(
                ReferenceExtractor::new().with_latency(config.reference_latency()),
            ))
        }
        (AiProvider::Reference, _) => {
            info!(latency_ms = config.reference_latency_ms, "Using reference extractor");
            Ok(Arc::new(
                ReferenceExtractor::new().with_latency(config.reference_latency()),
            ))
        }
    }
}
