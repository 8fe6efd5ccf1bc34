//! Completion backend trait and the Gemini implementation.

pub mod google;
pub mod http;

use async_trait::async_trait;

use crate::error::VireoError;
use crate::types::ImageInput;

/// Sampling temperature used for every request — a fixed
/// determinism/creativity tradeoff, not user-configurable.
pub const GENERATION_TEMPERATURE: f64 = 0.7;

/// A single completion request sent to a backend.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Present for text-optimization requests, absent for image analysis.
    pub system_instruction: Option<String>,
    pub user_text: String,
    /// Inline image part for multimodal requests.
    pub image: Option<ImageInput>,
    pub temperature: f64,
}

/// Seam to the remote text/multimodal completion service.
///
/// Each call is independent; implementations hold no mutable session state.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// The model ID this backend serves.
    fn model_id(&self) -> &str;

    /// Submit the request and return the trimmed response text.
    ///
    /// An empty string is a valid result; failures come back classified
    /// (authentication, rate limit, transport, API).
    async fn complete(&self, request: &CompletionRequest) -> Result<String, VireoError>;
}
