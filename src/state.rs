use std::sync::Arc;
use uuid::Uuid;

use crate::config::Config;
use crate::translator::{AzureDocumentTranslator, DocumentTranslator};

/// Environment variable the subscription key is read from, once at startup.
/// A missing key is a submission-time validation error, never a crash.
pub const API_KEY_ENV: &str = "TRANSLATOR_API_KEY";

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    api_key_present: bool,
    pub translator: Arc<dyn DocumentTranslator>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());
        let api_key_present = api_key.is_some();

        let translator = Arc::new(AzureDocumentTranslator::new(
            config.translator_config.endpoint.clone(),
            api_key,
        ));

        Self {
            config,
            api_key_present,
            translator,
        }
    }

    pub fn credential_present(&self) -> bool {
        self.api_key_present
    }

    /// Per-submission id carried through the logs.
    pub fn generate_request_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
impl AppState {
    pub fn for_tests(
        config: Config,
        translator: Arc<dyn DocumentTranslator>,
        credential_present: bool,
    ) -> Self {
        Self {
            config,
            api_key_present: credential_present,
            translator,
        }
    }
}
