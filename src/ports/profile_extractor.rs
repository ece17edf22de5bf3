//! Profile Extractor Port - Interface for turning assessment reports into a profile.
//!
//! One call, one outstanding request per session: the caller hands over the
//! documents it has and suspends until a complete [`IdentityProfile`] or an
//! [`ExtractionFailed`] comes back. No partial profile is ever returned.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct CannedExtractor(IdentityProfile);
//!
//! #[async_trait]
//! impl ProfileExtractor for CannedExtractor {
//!     async fn extract(&self, _documents: &DocumentSet) -> Result<IdentityProfile, ExtractionFailed> {
//!         Ok(self.0.clone())
//!     }
//!
//!     fn extractor_info(&self) -> ExtractorInfo {
//!         ExtractorInfo::new("canned", "fixture")
//!     }
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::SchemaValidationError;
use crate::domain::foundation::ValidationError;
use crate::domain::profile::IdentityProfile;

/// Media type every source document must carry.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Port for profile extraction.
///
/// Implementations are interchangeable strategies (live model call or the
/// offline reference fixture) and are chosen once per session.
///
/// # Contract
///
/// Implementations must:
/// - accept any subset of the four documents, including none
/// - return only profiles that passed schema validation
/// - recompute `strengths.top5` from `strengths.all`
#[async_trait]
pub trait ProfileExtractor: Send + Sync {
    /// Extract a profile from the supplied documents.
    async fn extract(&self, documents: &DocumentSet) -> Result<IdentityProfile, ExtractionFailed>;

    /// Extractor information (name, model).
    fn extractor_info(&self) -> ExtractorInfo;
}

/// Identifies an extractor implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractorInfo {
    /// Strategy name (e.g. "reference", "gemini").
    pub name: String,
    /// Model identifier.
    pub model: String,
}

impl ExtractorInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// The four fixed report slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentLabel {
    Disc,
    Anchors,
    Strengths,
    Values,
}

impl DocumentLabel {
    pub const ALL: [DocumentLabel; 4] = [
        DocumentLabel::Disc,
        DocumentLabel::Anchors,
        DocumentLabel::Strengths,
        DocumentLabel::Values,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DocumentLabel::Disc => "disc",
            DocumentLabel::Anchors => "anchors",
            DocumentLabel::Strengths => "strengths",
            DocumentLabel::Values => "values",
        }
    }

    /// Display name of the upload slot.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentLabel::Disc => "Perfil DISC Gerencial",
            DocumentLabel::Anchors => "Âncoras de Carreira",
            DocumentLabel::Strengths => "Forças Pessoais",
            DocumentLabel::Values => "Linguagem de Valorização",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DocumentLabel::Disc => "Relatório comportamental completo",
            DocumentLabel::Anchors => "Inventário de motivações",
            DocumentLabel::Strengths => "Mapeamento de talentos (VIA)",
            DocumentLabel::Values => "Preferências de reconhecimento",
        }
    }
}

impl fmt::Display for DocumentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for DocumentLabel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|label| label.key() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "label",
                    format!("unknown document label '{}', expected disc, anchors, strengths or values", s),
                )
            })
    }
}

/// One uploaded report.
#[derive(Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl SourceDocument {
    pub fn new(file_name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// A document declared as PDF.
    pub fn pdf(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(file_name, PDF_MEDIA_TYPE, bytes)
    }

    pub fn is_pdf(&self) -> bool {
        self.media_type.eq_ignore_ascii_case(PDF_MEDIA_TYPE)
    }
}

impl fmt::Debug for SourceDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceDocument")
            .field("file_name", &self.file_name)
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Labeled documents handed to an extractor, ordered by label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSet {
    documents: BTreeMap<DocumentLabel, SourceDocument>,
}

impl DocumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a document to a slot, replacing any previous one.
    ///
    /// # Errors
    ///
    /// - `UnsupportedMediaType` if the document is not a PDF
    /// - `EmptyField` if the document has no content
    pub fn attach(
        &mut self,
        label: DocumentLabel,
        document: SourceDocument,
    ) -> Result<Option<SourceDocument>, ValidationError> {
        if !document.is_pdf() {
            return Err(ValidationError::unsupported_media_type(
                label.key(),
                PDF_MEDIA_TYPE,
                document.media_type,
            ));
        }
        if document.bytes.is_empty() {
            return Err(ValidationError::empty_field(label.key()));
        }
        Ok(self.documents.insert(label, document))
    }

    pub fn get(&self, label: DocumentLabel) -> Option<&SourceDocument> {
        self.documents.get(&label)
    }

    pub fn remove(&mut self, label: DocumentLabel) -> Option<SourceDocument> {
        self.documents.remove(&label)
    }

    pub fn contains(&self, label: DocumentLabel) -> bool {
        self.documents.contains_key(&label)
    }

    /// Labels present, in slot order.
    pub fn labels(&self) -> Vec<DocumentLabel> {
        self.documents.keys().copied().collect()
    }

    /// Labels with no document attached.
    pub fn missing(&self) -> Vec<DocumentLabel> {
        DocumentLabel::ALL
            .into_iter()
            .filter(|label| !self.contains(*label))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DocumentLabel, &SourceDocument)> {
        self.documents.iter().map(|(label, document)| (*label, document))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// True once all four slots are filled.
    pub fn is_complete(&self) -> bool {
        self.documents.len() == DocumentLabel::ALL.len()
    }
}

/// Category of an extraction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionCause {
    /// Transport failure before a response arrived.
    Network,
    /// The service answered with an error status.
    Service,
    /// The service rejected the credentials.
    Authentication,
    /// The service refused the request itself (4xx other than auth and rate limits).
    Rejected,
    /// No answer within the configured timeout.
    Timeout,
    /// The answer did not decode or failed schema validation.
    InvalidResponse,
}

impl fmt::Display for ExtractionCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExtractionCause::Network => "network",
            ExtractionCause::Service => "service",
            ExtractionCause::Authentication => "authentication",
            ExtractionCause::Rejected => "rejected request",
            ExtractionCause::Timeout => "timeout",
            ExtractionCause::InvalidResponse => "invalid response",
        };
        write!(f, "{}", name)
    }
}

/// The single failure kind of profile extraction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("extraction failed ({cause}): {message}")]
pub struct ExtractionFailed {
    cause: ExtractionCause,
    message: String,
}

impl ExtractionFailed {
    pub fn new(cause: ExtractionCause, message: impl Into<String>) -> Self {
        Self {
            cause,
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ExtractionCause::Network, message)
    }

    /// Creates a service error.
    pub fn service(message: impl Into<String>) -> Self {
        Self::new(ExtractionCause::Service, message)
    }

    /// Creates an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ExtractionCause::Authentication, message)
    }

    /// Creates a rejected-request error.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(ExtractionCause::Rejected, message)
    }

    /// Creates a timeout error.
    pub fn timeout(timeout: Duration) -> Self {
        Self::new(
            ExtractionCause::Timeout,
            format!("no response after {:?}", timeout),
        )
    }

    /// Creates an invalid response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(ExtractionCause::InvalidResponse, message)
    }

    pub fn cause(&self) -> ExtractionCause {
        self.cause
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if a caller-side retry could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.cause,
            ExtractionCause::Network | ExtractionCause::Service | ExtractionCause::Timeout
        )
    }
}

impl From<SchemaValidationError> for ExtractionFailed {
    fn from(err: SchemaValidationError) -> Self {
        Self::invalid_response(err.to_string())
    }
}
