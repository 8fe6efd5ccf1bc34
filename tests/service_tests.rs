//! Tests for the caller-facing service using the mock backend.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use common::MockBackend;

use vireo::error::VireoError;
use vireo::provider::{CompletionBackend, CompletionRequest, GENERATION_TEMPERATURE};
use vireo::service::PromptService;
use vireo::session::SessionState;
use vireo::settings::Settings;
use vireo::template::QUALITY_MODIFIERS;
use vireo::types::{GenerationRequest, ImageInput};

const OPTIMIZE_FAILURE: &str =
    "Failed to optimize prompt. Please check your API key and try again.";
const IMAGE_FAILURE: &str =
    "Failed to generate prompt from image. Please check your API key and try again.";

fn png_image() -> ImageInput {
    ImageInput::from_bytes(b"\x89PNG\r\n\x1a\nfake", "image/png").unwrap()
}

#[tokio::test]
async fn optimize_prompt_returns_backend_text() {
    let service = PromptService::with_backend(MockBackend::new());
    service.backend().queue_response("an optimized prompt");

    let result = service
        .optimize_prompt("a red car", &Settings::default(), false)
        .await
        .unwrap();

    assert_eq!(result, "an optimized prompt");
}

#[tokio::test]
async fn optimize_prompt_builds_full_instructions() {
    let backend = MockBackend::new();
    backend.queue_response("ok");
    let service = PromptService::with_backend(backend);

    service
        .optimize_prompt("a red car", &Settings::default(), false)
        .await
        .unwrap();

    let request = service.backend().last_request().unwrap();
    let settings = Settings::default();
    let system = request.system_instruction.as_deref().unwrap();
    assert!(system.contains(settings.cultural_focus.as_str()));
    assert!(system.contains("expert prompt engineer"));

    let user = &request.user_text;
    assert!(user.contains("a red car"));
    assert!(user.contains(settings.output_style.as_str()));
    assert!(user.contains(settings.perspective.as_str()));
    assert!(user.contains(settings.lighting.as_str()));
    assert!(user.contains(settings.cultural_focus.as_str()));
    assert!(user.contains(QUALITY_MODIFIERS));
    assert!(request.image.is_none());
    assert_eq!(request.temperature, GENERATION_TEMPERATURE);
}

#[tokio::test]
async fn optimize_prompt_image_note_follows_flag() {
    let service = PromptService::with_backend(MockBackend::new());

    service
        .optimize_prompt("idea", &Settings::default(), true)
        .await
        .unwrap();
    let with_image = service.backend().last_request().unwrap();
    assert!(with_image.user_text.contains("An image was provided"));
    assert!(with_image.user_text.contains("--style_ref --color_ref"));

    service
        .optimize_prompt("idea", &Settings::default(), false)
        .await
        .unwrap();
    let without_image = service.backend().last_request().unwrap();
    assert!(!without_image.user_text.contains("An image was provided"));
}

#[tokio::test]
async fn empty_prompt_without_image_rejected_before_network() {
    let service = PromptService::with_backend(MockBackend::new());

    let err = service
        .optimize_prompt("   ", &Settings::default(), false)
        .await
        .unwrap_err();

    assert!(matches!(err, VireoError::InvalidInput(_)));
    assert_eq!(service.backend().request_count(), 0);
}

#[tokio::test]
async fn empty_prompt_with_image_is_accepted() {
    let service = PromptService::with_backend(MockBackend::new());

    let result = service
        .optimize_prompt("", &Settings::default(), true)
        .await;

    assert!(result.is_ok());
    assert_eq!(service.backend().request_count(), 1);
}

#[tokio::test]
async fn empty_backend_response_passes_through() {
    let service = PromptService::with_backend(MockBackend::new());
    service.backend().queue_response("");

    let result = service
        .optimize_prompt("idea", &Settings::default(), false)
        .await
        .unwrap();

    assert_eq!(result, "");
}

#[tokio::test]
async fn backend_failure_surfaces_generic_optimize_message() {
    let service = PromptService::with_backend(MockBackend::new());
    service.backend().queue_error(VireoError::Api {
        status: 500,
        message: "internal provider detail".to_string(),
    });

    let err = service
        .optimize_prompt("idea", &Settings::default(), false)
        .await
        .unwrap_err();

    match err {
        VireoError::Generation(message) => {
            assert_eq!(message, OPTIMIZE_FAILURE);
            assert!(!message.contains("internal provider detail"));
        }
        other => panic!("expected Generation, got {other:?}"),
    }
}

#[tokio::test]
async fn auth_failure_surfaces_same_generic_message() {
    let service = PromptService::with_backend(MockBackend::new());
    service
        .backend()
        .queue_error(VireoError::Authentication("bad key".to_string()));

    let err = service
        .optimize_prompt("idea", &Settings::default(), false)
        .await
        .unwrap_err();

    assert!(matches!(err, VireoError::Generation(msg) if msg == OPTIMIZE_FAILURE));
}

#[tokio::test]
async fn generate_from_image_sends_fixed_instruction_and_image() {
    let service = PromptService::with_backend(MockBackend::new());
    service.backend().queue_response("described prompt");

    let result = service.generate_from_image(png_image()).await.unwrap();
    assert_eq!(result, "described prompt");

    let request = service.backend().last_request().unwrap();
    assert!(request.system_instruction.is_none());
    assert!(request.user_text.contains("Analyze the provided image"));
    assert!(request.user_text.contains(QUALITY_MODIFIERS));
    assert_eq!(request.image.unwrap(), png_image());
    assert_eq!(request.temperature, GENERATION_TEMPERATURE);
}

#[tokio::test]
async fn generate_from_image_failure_uses_image_message() {
    let service = PromptService::with_backend(MockBackend::new());
    service.backend().queue_error(VireoError::Api {
        status: 503,
        message: "unavailable".to_string(),
    });

    let err = service.generate_from_image(png_image()).await.unwrap_err();

    assert!(matches!(err, VireoError::Generation(msg) if msg == IMAGE_FAILURE));
}

#[tokio::test]
async fn unsupported_mime_type_rejected_before_request() {
    let err = ImageInput::from_bytes(b"GIF89a", "image/gif").unwrap_err();
    assert!(matches!(err, VireoError::InvalidInput(_)));
}

#[tokio::test]
async fn execute_dispatches_both_variants() {
    let service = PromptService::with_backend(MockBackend::new());

    service
        .execute(GenerationRequest::TextOptimization {
            base_prompt: "idea".to_string(),
            settings: Settings::default(),
            has_image: false,
        })
        .await
        .unwrap();
    assert!(service.backend().last_request().unwrap().image.is_none());

    service
        .execute(GenerationRequest::ImageAnalysis {
            image: png_image(),
        })
        .await
        .unwrap();
    assert!(service.backend().last_request().unwrap().image.is_some());
}

/// Backend that parks until released, for exercising the busy slot.
struct BlockingBackend {
    release: tokio::sync::Notify,
}

impl BlockingBackend {
    fn new() -> Self {
        Self {
            release: tokio::sync::Notify::new(),
        }
    }
}

#[async_trait]
impl CompletionBackend for BlockingBackend {
    fn model_id(&self) -> &str {
        "blocking-model"
    }

    async fn complete(&self, _request: &CompletionRequest) -> Result<String, VireoError> {
        self.release.notified().await;
        Ok("slow response".to_string())
    }
}

#[tokio::test]
async fn second_request_while_busy_is_rejected() {
    let service = Arc::new(PromptService::with_backend(BlockingBackend::new()));

    let first = {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            service
                .optimize_prompt("idea", &Settings::default(), false)
                .await
        })
    };

    // Wait for the first request to take the slot.
    while service.session_state() != SessionState::Optimizing {
        tokio::task::yield_now().await;
    }

    let err = service.generate_from_image(png_image()).await.unwrap_err();
    assert!(matches!(err, VireoError::Busy));

    service.backend().release.notify_one();
    let result = first.await.unwrap().unwrap();
    assert_eq!(result, "slow response");
    assert_eq!(service.session_state(), SessionState::Idle);
}
