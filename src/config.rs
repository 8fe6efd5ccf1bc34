//! Configuration (explicit values take precedence over environment).

use crate::error::VireoError;
use crate::provider::google::GeminiModel;

/// Injected configuration for the generation client.
///
/// The credential is resolved once, up front; request logic never reaches
/// into the environment. `validate` is the required-at-startup check.
#[derive(Debug, Clone, Default)]
pub struct VireoConfig {
    api_key: Option<String>,
    base_url: Option<String>,
    model: GeminiModel,
}

impl VireoConfig {
    /// Empty config; credentials must be supplied via `with_api_key`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from environment variables (`GEMINI_API_KEY` or `GOOGLE_API_KEY`,
    /// plus optional `VIREO_BASE_URL` and `VIREO_MODEL`).
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error

        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .ok();
        let base_url = std::env::var("VIREO_BASE_URL").ok();
        let model = std::env::var("VIREO_MODEL")
            .ok()
            .map(|m| m.parse().unwrap_or(GeminiModel::Custom(m)))
            .unwrap_or_default();

        Self {
            api_key,
            base_url,
            model,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_model(mut self, model: GeminiModel) -> Self {
        self.model = model;
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn model(&self) -> &GeminiModel {
        &self.model
    }

    /// Startup validation: a non-empty credential must be present.
    pub fn validate(&self) -> Result<(), VireoError> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(()),
            _ => Err(VireoError::Configuration(
                "Missing GEMINI_API_KEY (or GOOGLE_API_KEY)".to_string(),
            )),
        }
    }
}
