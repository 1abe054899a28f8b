mod azure;
mod outcome;

pub use azure::AzureDocumentTranslator;
pub use outcome::{classify_response, classify_transport_error};

use async_trait::async_trait;
use std::time::Duration;

use crate::document::UploadedDocument;
use crate::languages;

/// Fixed API version the service contract is pinned to.
pub const API_VERSION: &str = "2024-05-01";

/// Multipart field name the service expects the document under.
pub const DOCUMENT_FIELD: &str = "document";

pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Upper bound on one translation round trip. There is no cancellation once
/// a request is in flight; this is the only timeout control.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Outbound request descriptor, built only after validation passed.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub source_code: &'static str,
    pub target_code: &'static str,
    pub target_label: String,
    pub mime_type: &'static str,
    pub document: UploadedDocument,
}

impl TranslationRequest {
    pub fn build(document: UploadedDocument, source_label: &str, target_label: &str) -> Self {
        let mime_type = document.mime_type();
        Self {
            source_code: languages::source_code(source_label),
            target_code: languages::target_code(target_label),
            target_label: target_label.to_string(),
            mime_type,
            document,
        }
    }

    /// Name offered to the browser for the translated download.
    pub fn download_file_name(&self) -> String {
        format!("Translated_{}.{}", self.target_label, self.document.extension())
    }
}

/// Translated document as returned by the service, offered for download and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedDocument {
    pub content: Vec<u8>,
    pub file_name: String,
    pub mime_type: String,
}

/// Every way a submission can fail after validation, each with the exact
/// message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslationFailure {
    #[error("Authentication failed: invalid API key.")]
    Authentication,
    #[error("Access denied. Check service permissions and quotas.")]
    AccessDenied,
    #[error("Translation quota has been exceeded. Please contact your administrator or try again later.")]
    QuotaExceeded,
    #[error("The document size exceeds the maximum allowed limit.")]
    DocumentTooLarge,
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,
    #[error("Translation service is unavailable. Please try again later.")]
    ServiceUnavailable,
    #[error("Translation failed with status code: {status}")]
    Unclassified { status: u16, details: Vec<String> },
    #[error("Request timed out. The translation service is taking too long to respond. Please try again later.")]
    Timeout,
    #[error("Connection error. Unable to reach the translation service. Please check your internet connection and try again.")]
    ConnectionFailed,
    #[error("Network error: {0}. Please check your connection and try again.")]
    Network(String),
}

impl TranslationFailure {
    /// All user-facing lines for this failure, primary message first.
    pub fn messages(&self) -> Vec<String> {
        let mut messages = vec![self.to_string()];
        if let TranslationFailure::Unclassified { details, .. } = self {
            messages.extend(details.iter().cloned());
        }
        messages
    }

    /// HTTP status the backend answers the browser with. Upstream statuses
    /// are passed through for unclassified failures; transport failures map
    /// to gateway errors.
    pub fn http_status(&self) -> u16 {
        match self {
            TranslationFailure::Authentication => 401,
            TranslationFailure::AccessDenied
            | TranslationFailure::QuotaExceeded
            | TranslationFailure::DocumentTooLarge => 403,
            TranslationFailure::RateLimited => 429,
            TranslationFailure::ServiceUnavailable => 502,
            TranslationFailure::Unclassified { status, .. } => *status,
            TranslationFailure::Timeout => 504,
            TranslationFailure::ConnectionFailed | TranslationFailure::Network(_) => 502,
        }
    }
}

pub type TranslationOutcome = Result<TranslatedDocument, TranslationFailure>;

/// Seam between the routes layer and the concrete HTTP client.
#[async_trait]
pub trait DocumentTranslator: Send + Sync {
    async fn translate(&self, request: TranslationRequest) -> TranslationOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_codes_from_the_language_map() {
        let request = TranslationRequest::build(
            UploadedDocument::new("report.docx", vec![1, 2, 3]),
            "English",
            "French",
        );
        assert_eq!(request.source_code, "en");
        assert_eq!(request.target_code, "fr");
        assert_eq!(
            request.mime_type,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
    }

    #[test]
    fn download_name_embeds_target_label_and_extension() {
        let request = TranslationRequest::build(
            UploadedDocument::new("report.pdf", vec![1]),
            "English",
            "Chinese Simplified",
        );
        assert_eq!(request.download_file_name(), "Translated_Chinese Simplified.pdf");
    }

    #[test]
    fn unknown_labels_keep_the_defensive_fallbacks() {
        let request =
            TranslationRequest::build(UploadedDocument::new("a.txt", vec![1]), "??", "??");
        assert_eq!(request.source_code, "en");
        assert_eq!(request.target_code, "te");
    }

    #[test]
    fn unclassified_messages_carry_the_details() {
        let failure = TranslationFailure::Unclassified {
            status: 404,
            details: vec!["Error: not found".to_string()],
        };
        assert_eq!(
            failure.messages(),
            vec![
                "Translation failed with status code: 404".to_string(),
                "Error: not found".to_string(),
            ]
        );
    }
}
