//! Gemini Extractor - live profile extraction through Google's Gemini API.
//!
//! Sends one `generateContent` request carrying every supplied report as
//! inline PDF data plus the extraction instruction, with the output
//! constrained to the profile response schema.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-1.5-pro")
//!     .with_timeout(Duration::from_secs(120));
//!
//! let extractor = GeminiExtractor::new(config)?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::ProfileDecoder;
use crate::domain::profile::IdentityProfile;
use crate::ports::{DocumentSet, ExtractionFailed, ExtractorInfo, ProfileExtractor};

/// Default Gemini model for PDF extraction.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro";

/// Default Gemini API base URL.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const EXTRACTION_INSTRUCTION: &str = "Extract the following data from these 4 reports \
(DISC, Anchors, Strengths, Values). \
Ensure 'towerChart' captures both Natural and Adapted graphs. \
Ensure 'indices' captures A.E.M., A.P.F., I.P.S., I.D.A., I.P.M. specifically.";

/// Configuration for the Gemini extractor.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "gemini-1.5-pro").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API extractor implementation.
pub struct GeminiExtractor {
    config: GeminiConfig,
    client: Client,
    decoder: ProfileDecoder,
}

impl GeminiExtractor {
    /// Creates a new Gemini extractor with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            config,
            client,
            decoder: ProfileDecoder::default(),
        })
    }

    /// Builds the generateContent endpoint URL.
    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Converts the documents into Gemini's request format.
    fn to_gemini_request(&self, documents: &DocumentSet) -> GeminiRequest {
        let mut parts: Vec<GeminiPart> = documents
            .iter()
            .map(|(_, document)| GeminiPart::InlineData {
                inline_data: InlineData {
                    mime_type: document.media_type.clone(),
                    data: BASE64.encode(&document.bytes),
                },
            })
            .collect();
        parts.push(GeminiPart::Text {
            text: EXTRACTION_INSTRUCTION.to_string(),
        });

        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts,
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: self.decoder.response_schema().clone(),
            },
        }
    }

    async fn send_request(&self, documents: &DocumentSet) -> Result<Response, ExtractionFailed> {
        let request = self.to_gemini_request(documents);

        self.client
            .post(self.generate_url())
            .header("x-goog-api-key", self.config.api_key())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))
    }

    fn transport_error(&self, e: reqwest::Error) -> ExtractionFailed {
        if e.is_timeout() {
            ExtractionFailed::timeout(self.config.timeout)
        } else if e.is_connect() {
            ExtractionFailed::network(format!("Connection failed: {}", e))
        } else {
            ExtractionFailed::network(e.to_string())
        }
    }

    /// Parses the API response status and handles errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, ExtractionFailed> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(status_error(status.as_u16(), &error_body))
    }

    async fn parse_response(&self, response: Response) -> Result<IdentityProfile, ExtractionFailed> {
        let response = self.handle_response_status(response).await?;

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        let gemini_response: GeminiResponse = serde_json::from_str(&body)
            .map_err(|e| ExtractionFailed::invalid_response(format!("Failed to parse response: {}", e)))?;

        let text = gemini_response.first_text().ok_or_else(|| {
            ExtractionFailed::invalid_response("response carried no candidate text")
        })?;

        self.decoder.decode_str(&text)
    }
}

/// Maps an unsuccessful HTTP status to an extraction failure.
fn status_error(status: u16, body: &str) -> ExtractionFailed {
    match status {
        401 | 403 => ExtractionFailed::authentication(format!("status {}", status)),
        429 => ExtractionFailed::service(format!("rate limited: {}", body)),
        400..=499 => ExtractionFailed::rejected(format!("Request rejected {}: {}", status, body)),
        500..=599 => ExtractionFailed::service(format!("Server error {}: {}", status, body)),
        _ => ExtractionFailed::service(format!("Unexpected status {}: {}", status, body)),
    }
}

#[async_trait]
impl ProfileExtractor for GeminiExtractor {
    async fn extract(&self, documents: &DocumentSet) -> Result<IdentityProfile, ExtractionFailed> {
        info!(
            model = %self.config.model,
            documents = ?documents.labels(),
            "Starting Gemini extraction"
        );

        let response = self.send_request(documents).await.map_err(|e| {
            error!(error = %e, "Gemini request failed");
            e
        })?;
        debug!(status = response.status().as_u16(), "Gemini responded");

        self.parse_response(response).await.map_err(|e| {
            warn!(error = %e, "Gemini extraction failed");
            e
        })
    }

    fn extractor_info(&self) -> ExtractorInfo {
        ExtractorInfo::new("gemini", self.config.model.clone())
    }
}

// ============================================================================
// Gemini API Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    role: String,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum GeminiPart {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize, Deserialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

impl GeminiResponse {
    /// Concatenated text parts of the first candidate.
    fn first_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content
            .parts
            .into_iter()
            .filter_map(|part| match part {
                GeminiPart::Text { text } => Some(text),
                GeminiPart::InlineData { .. } => None,
            })
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
