use async_trait::async_trait;
use reqwest::{multipart, Client};
use tracing::{debug, error, info};

use super::outcome::{classify_response, classify_transport_error};
use super::{
    DocumentTranslator, TranslationFailure, TranslationOutcome, TranslationRequest, API_VERSION,
    DOCUMENT_FIELD, REQUEST_TIMEOUT, SUBSCRIPTION_KEY_HEADER,
};

/// Client for the hosted document-translation endpoint.
#[derive(Debug, Clone)]
pub struct AzureDocumentTranslator {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl AzureDocumentTranslator {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }
}

#[async_trait]
impl DocumentTranslator for AzureDocumentTranslator {
    async fn translate(&self, request: TranslationRequest) -> TranslationOutcome {
        let download_file_name = request.download_file_name();
        let mime_type = request.mime_type;

        let part = multipart::Part::bytes(request.document.content)
            .file_name(request.document.file_name)
            .mime_str(mime_type)
            .map_err(|e| TranslationFailure::Network(e.to_string()))?;
        let form = multipart::Form::new().part(DOCUMENT_FIELD, part);

        debug!(
            "Sending document for translation: {} -> {}",
            request.source_code, request.target_code
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(
                SUBSCRIPTION_KEY_HEADER,
                self.api_key.as_deref().unwrap_or_default(),
            )
            .query(&[
                ("sourceLanguage", request.source_code),
                ("targetLanguage", request.target_code),
                ("api-version", API_VERSION),
            ])
            .multipart(form)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                error!("Translation request failed: {}", e);
                classify_transport_error(&e)
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| classify_transport_error(&e))?;

        info!(
            "Translation service responded: status={} body_bytes={}",
            status.as_u16(),
            body.len()
        );
        classify_response(status, &body, &download_file_name, mime_type)
    }
}
