use reqwest::StatusCode;
use serde::Deserialize;

use super::{TranslatedDocument, TranslationFailure, TranslationOutcome};

/// Error body the service returns on non-200 responses. Every field is
/// optional; the service populates them inconsistently.
#[derive(Debug, Default, Deserialize)]
struct ServiceErrorBody {
    error: Option<ServiceError>,
}

#[derive(Debug, Default, Deserialize)]
struct ServiceError {
    code: Option<String>,
    message: Option<String>,
    #[serde(rename = "innerError")]
    inner_error: Option<ServiceInnerError>,
}

#[derive(Debug, Default, Deserialize)]
struct ServiceInnerError {
    code: Option<String>,
    message: Option<String>,
}

/// Classify one `(status, body)` pair into the single outcome shown to the
/// user. Pure and deterministic; calling it twice on the same input yields
/// the same outcome.
pub fn classify_response(
    status: StatusCode,
    body: &[u8],
    download_file_name: &str,
    mime_type: &str,
) -> TranslationOutcome {
    match status.as_u16() {
        200 => Ok(TranslatedDocument {
            content: body.to_vec(),
            file_name: download_file_name.to_string(),
            mime_type: mime_type.to_string(),
        }),
        401 => Err(TranslationFailure::Authentication),
        403 => Err(classify_access_denied(body)),
        429 => Err(TranslationFailure::RateLimited),
        500 => Err(TranslationFailure::ServiceUnavailable),
        other => Err(classify_unexpected(other, body)),
    }
}

/// Map a transport-level failure, where no status code exists, to its fixed
/// user-facing category.
pub fn classify_transport_error(error: &reqwest::Error) -> TranslationFailure {
    if error.is_timeout() {
        TranslationFailure::Timeout
    } else if error.is_connect() {
        TranslationFailure::ConnectionFailed
    } else {
        TranslationFailure::Network(error.to_string())
    }
}

fn parse_error_body(body: &[u8]) -> Option<ServiceError> {
    serde_json::from_slice::<ServiceErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
}

/// Substring containment on purpose, not exact match: the service is known
/// to prefix and suffix its codes.
fn refine_by_code(error: &ServiceError) -> Option<TranslationFailure> {
    let code = error.code.as_deref().unwrap_or_default();
    let inner_code = error
        .inner_error
        .as_ref()
        .and_then(|inner| inner.code.as_deref())
        .unwrap_or_default();

    if code.contains("QuotaExceeded") || inner_code.contains("QuotaExceeded") {
        Some(TranslationFailure::QuotaExceeded)
    } else if code.contains("MaxDocumentSizeExceeded") || inner_code.contains("MaxDocumentSizeExceeded")
    {
        Some(TranslationFailure::DocumentTooLarge)
    } else {
        None
    }
}

fn classify_access_denied(body: &[u8]) -> TranslationFailure {
    parse_error_body(body)
        .as_ref()
        .and_then(refine_by_code)
        .unwrap_or(TranslationFailure::AccessDenied)
}

fn classify_unexpected(status: u16, body: &[u8]) -> TranslationFailure {
    let Some(error) = parse_error_body(body) else {
        // Unparseable body, or parseable JSON without an error object: show
        // the raw text rather than hide the failure.
        return TranslationFailure::Unclassified {
            status,
            details: vec![String::from_utf8_lossy(body).to_string()],
        };
    };

    if let Some(refined) = refine_by_code(&error) {
        return refined;
    }

    let mut details = Vec::new();
    if let Some(message) = error.message.as_deref().filter(|m| !m.is_empty()) {
        details.push(format!("Error: {message}"));
    }
    if let Some(code) = error.code.as_deref().filter(|c| !c.is_empty()) {
        details.push(format!("Error Code: {code}"));
    }
    if let Some(inner) = &error.inner_error {
        if let Some(inner_code) = inner.code.as_deref().filter(|c| !c.is_empty()) {
            details.push(format!(
                "Details: {} - {}",
                inner_code,
                inner.message.as_deref().unwrap_or_default()
            ));
        }
    }
    TranslationFailure::Unclassified { status, details }
}
