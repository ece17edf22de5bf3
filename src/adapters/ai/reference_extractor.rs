//! Reference Extractor - offline stand-in for the live extraction call.
//!
//! Waits a fixed simulated latency, then decodes the canonical fixture
//! through the same pipeline a live response goes through. Callers cannot
//! tell it apart from a live extractor except by latency.
//!
//! # Example
//!
//! ```ignore
//! let extractor = ReferenceExtractor::new().with_latency(Duration::from_millis(10));
//! let profile = extractor.extract(&DocumentSet::new()).await?;
//! assert_eq!(profile.disc.dominant_profile, "Executor-Dominante");
//! ```

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::{debug, info};

use super::ProfileDecoder;
use crate::domain::profile::IdentityProfile;
use crate::ports::{DocumentSet, ExtractionFailed, ExtractorInfo, ProfileExtractor};

/// Simulated processing time of the reference extractor.
pub const DEFAULT_REFERENCE_LATENCY: Duration = Duration::from_millis(3000);

const REFERENCE_FIXTURE: &str = include_str!("fixtures/reference_profile.json");

/// Deterministic extractor returning the canonical fixture profile.
#[derive(Clone)]
pub struct ReferenceExtractor {
    latency: Duration,
    decoder: ProfileDecoder,
}

impl Default for ReferenceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceExtractor {
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_REFERENCE_LATENCY,
            decoder: ProfileDecoder::default(),
        }
    }

    /// Sets the simulated latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl ProfileExtractor for ReferenceExtractor {
    async fn extract(&self, documents: &DocumentSet) -> Result<IdentityProfile, ExtractionFailed> {
        info!(
            documents = ?documents.labels(),
            missing = ?documents.missing(),
            "Starting reference extraction"
        );

        if !self.latency.is_zero() {
            debug!(latency_ms = self.latency.as_millis() as u64, "Simulating extraction latency");
            sleep(self.latency).await;
        }

        self.decoder.decode_str(REFERENCE_FIXTURE)
    }

    fn extractor_info(&self) -> ExtractorInfo {
        ExtractorInfo::new("reference", "fixture")
    }
}
