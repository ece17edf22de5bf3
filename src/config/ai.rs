//! Profile extraction configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Profile extraction configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Extraction strategy
    #[serde(default)]
    pub provider: AiProvider,

    /// Gemini API key
    pub gemini_api_key: Option<Secret<String>>,

    /// Gemini model
    #[serde(default = "default_model")]
    pub model: String,

    /// Gemini API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Simulated latency of the reference extractor in milliseconds
    #[serde(default = "default_reference_latency")]
    pub reference_latency_ms: u64,
}

/// Extraction strategy
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    /// Canned fixture after a simulated latency
    #[default]
    Reference,
    /// Live Gemini call
    Gemini,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get reference latency as Duration
    pub fn reference_latency(&self) -> Duration {
        Duration::from_millis(self.reference_latency_ms)
    }

    /// Check if a Gemini key is configured
    pub fn has_gemini(&self) -> bool {
        self.gemini_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty())
    }

    /// Exposes the Gemini key (for building the extractor)
    pub fn gemini_api_key(&self) -> Option<&str> {
        self.gemini_api_key
            .as_ref()
            .map(|k| k.expose_secret().as_str())
            .filter(|k| !k.is_empty())
    }

    /// Validate extraction configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.provider == AiProvider::Gemini {
            if !self.has_gemini() {
                return Err(ValidationError::MissingRequired("GEMINI_API_KEY"));
            }
            if self.timeout_secs == 0 {
                return Err(ValidationError::InvalidTimeout);
            }
            if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
                return Err(ValidationError::InvalidBaseUrl);
            }
            if self.model.trim().is_empty() {
                return Err(ValidationError::MissingRequired("AI_MODEL"));
            }
        }

        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: AiProvider::default(),
            gemini_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            reference_latency_ms: default_reference_latency(),
        }
    }
}

fn default_model() -> String {
    "gemini-1.5-pro".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_timeout() -> u64 {
    120
}

fn default_reference_latency() -> u64 {
    3000
}
