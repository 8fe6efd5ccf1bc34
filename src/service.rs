//! Caller-facing prompt optimization service.
//!
//! Two entry points mirror the two UI actions: optimize a text idea, or
//! generate a prompt from a reference image. Input validation happens before
//! any network call; backend failures are folded into a single fixed
//! user-facing message and the classified cause is only logged.

use std::time::Duration;

use tracing::{debug, error};

use crate::config::VireoConfig;
use crate::error::VireoError;
use crate::provider::google::GoogleClient;
use crate::provider::{CompletionBackend, CompletionRequest, GENERATION_TEMPERATURE};
use crate::session::{SessionSlot, SessionState};
use crate::settings::Settings;
use crate::template;
use crate::types::{GenerationRequest, ImageInput};
use crate::util::with_timeout;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const OPTIMIZE_FAILURE: &str =
    "Failed to optimize prompt. Please check your API key and try again.";
const IMAGE_FAILURE: &str =
    "Failed to generate prompt from image. Please check your API key and try again.";

/// Stateless request orchestration over a completion backend, guarded by the
/// single-slot session.
pub struct PromptService<B: CompletionBackend> {
    backend: B,
    session: SessionSlot,
}

impl PromptService<GoogleClient> {
    /// Production service backed by the Gemini endpoint.
    ///
    /// Fails fast when the config carries no credential.
    pub fn new(config: &VireoConfig) -> Result<Self, VireoError> {
        config.validate()?;
        let api_key = config
            .api_key()
            .ok_or_else(|| VireoError::Configuration("Missing API key".to_string()))?
            .to_string();
        let mut client = GoogleClient::new(config.model().clone(), api_key);
        if let Some(base_url) = config.base_url() {
            client = client.with_base_url(base_url);
        }
        Ok(Self::with_backend(client))
    }
}

impl<B: CompletionBackend> PromptService<B> {
    /// Service over an arbitrary backend (tests inject mocks here).
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            session: SessionSlot::new(),
        }
    }

    /// Current session state (`Idle` unless a request is in flight).
    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Optimize a free-text idea under the given settings.
    ///
    /// At least one of prompt or image must be present; an empty prompt
    /// without an image is rejected before any network call.
    pub async fn optimize_prompt(
        &self,
        base_prompt: &str,
        settings: &Settings,
        has_image: bool,
    ) -> Result<String, VireoError> {
        if base_prompt.trim().is_empty() && !has_image {
            return Err(VireoError::InvalidInput(
                "Please provide a base prompt or an image.".to_string(),
            ));
        }
        let _guard = self.session.acquire(SessionState::Optimizing)?;

        let instructions = template::render_optimization(base_prompt, settings, has_image);
        let request = CompletionRequest {
            system_instruction: Some(instructions.system),
            user_text: instructions.user,
            image: None,
            temperature: GENERATION_TEMPERATURE,
        };
        self.dispatch(request, OPTIMIZE_FAILURE).await
    }

    /// Generate a descriptive prompt from a reference image.
    ///
    /// Any free-text prompt is ignored on this path by design.
    pub async fn generate_from_image(&self, image: ImageInput) -> Result<String, VireoError> {
        let _guard = self.session.acquire(SessionState::Generating)?;

        let request = CompletionRequest {
            system_instruction: None,
            user_text: template::render_image_analysis().to_string(),
            image: Some(image),
            temperature: GENERATION_TEMPERATURE,
        };
        self.dispatch(request, IMAGE_FAILURE).await
    }

    /// Dispatch a pre-built request variant.
    pub async fn execute(&self, request: GenerationRequest) -> Result<String, VireoError> {
        match request {
            GenerationRequest::TextOptimization {
                base_prompt,
                settings,
                has_image,
            } => self.optimize_prompt(&base_prompt, &settings, has_image).await,
            GenerationRequest::ImageAnalysis { image } => self.generate_from_image(image).await,
        }
    }

    async fn dispatch(
        &self,
        request: CompletionRequest,
        failure_message: &str,
    ) -> Result<String, VireoError> {
        debug!(model = self.backend.model_id(), "dispatching completion request");
        match with_timeout(REQUEST_TIMEOUT, self.backend.complete(&request)).await {
            Ok(text) => Ok(text),
            Err(err) => {
                error!(error = %err, "generation request failed");
                Err(VireoError::Generation(failure_message.to_string()))
            }
        }
    }
}
