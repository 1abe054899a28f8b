use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::services::ServeDir;
use tracing::{debug, info, warn};

use crate::document::{UploadedDocument, SUPPORTED_FORMATS};
use crate::languages;
use crate::state::AppState;
use crate::translator::TranslationRequest;
use crate::validation::{validate, SubmissionForm};

/// Generous transport-level ceiling; the real per-format caps are enforced
/// by validation so the user gets a proper message instead of a 413.
const MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

const DISCLAIMER_HEADER: &str = "x-translation-disclaimer";
const DISCLAIMER: &str = "The document translator achieves about 99% accuracy for supported formats. Please review all translated documents before publishing or sharing.";

pub fn create_routes(state: AppState) -> Router<AppState> {
    let web_dir = state.config.system_config.web_dir.clone();

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/languages", get(get_languages))
        .route("/api/formats", get(get_formats))
        .route("/api/translate", post(translate_document))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        // Upload page and its assets
        .fallback_service(ServeDir::new(web_dir))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "credential_configured": state.credential_present()
    }))
}

async fn get_languages() -> Json<Value> {
    Json(json!({
        "languages": languages::labels(),
        "default_source": languages::DEFAULT_SOURCE_LABEL
    }))
}

async fn get_formats() -> Json<Value> {
    Json(json!({ "formats": SUPPORTED_FORMATS }))
}

/// One full submission cycle: collect the multipart form, validate, build
/// the outbound request, call the service, answer with the translated bytes
/// or the failure messages. Nothing survives past the response.
async fn translate_document(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let request_id = state.generate_request_id();

    let form = match collect_form(&mut multipart, &request_id).await {
        Ok(form) => form,
        Err(response) => return response,
    };

    let submission = match validate(form, state.credential_present()) {
        Ok(submission) => submission,
        Err(errors) => {
            info!(
                "[{}] Submission rejected by validation: {} error(s)",
                request_id,
                errors.len()
            );
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, errors);
        }
    };

    let request = TranslationRequest::build(
        submission.document,
        &submission.source_label,
        &submission.target_label,
    );
    info!(
        "[{}] Translating '{}' ({} bytes) {} -> {}",
        request_id,
        request.document.file_name,
        request.document.byte_size(),
        request.source_code,
        request.target_code
    );

    match state.translator.translate(request).await {
        Ok(translated) => {
            info!(
                "[{}] Translation successful: {}",
                request_id, translated.file_name
            );
            (
                [
                    (header::CONTENT_TYPE, translated.mime_type.clone()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", translated.file_name),
                    ),
                    (
                        HeaderName::from_static(DISCLAIMER_HEADER),
                        DISCLAIMER.to_string(),
                    ),
                ],
                translated.content,
            )
                .into_response()
        }
        Err(failure) => {
            warn!("[{}] Translation failed: {}", request_id, failure);
            let status =
                StatusCode::from_u16(failure.http_status()).unwrap_or(StatusCode::BAD_GATEWAY);
            error_response(status, failure.messages())
        }
    }
}

async fn collect_form(
    multipart: &mut Multipart,
    request_id: &str,
) -> Result<SubmissionForm, Response> {
    let mut form = SubmissionForm::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!("[{}] Malformed multipart submission: {}", request_id, e);
                return Err(unreadable_submission());
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "document" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                match field.bytes().await {
                    Ok(bytes) => form
                        .documents
                        .push(UploadedDocument::new(file_name, bytes.to_vec())),
                    Err(e) => {
                        warn!("[{}] Failed to read document field: {}", request_id, e);
                        return Err(unreadable_submission());
                    }
                }
            }
            "source_language" => form.source_label = field.text().await.unwrap_or_default(),
            "target_language" => form.target_label = field.text().await.unwrap_or_default(),
            other => debug!("[{}] Ignoring unknown field: {}", request_id, other),
        }
    }

    Ok(form)
}

fn unreadable_submission() -> Response {
    error_response(
        StatusCode::BAD_REQUEST,
        vec!["The submission could not be read. Please try again.".to_string()],
    )
}

fn error_response(status: StatusCode, errors: Vec<String>) -> Response {
    (status, Json(json!({ "errors": errors }))).into_response()
}
