//! Convenience re-exports for common use.

pub use crate::config::VireoConfig;
pub use crate::error::{Result, VireoError};
pub use crate::highlight::{highlight, HighlightSegment};
pub use crate::provider::google::{GeminiModel, GoogleClient};
pub use crate::provider::{CompletionBackend, CompletionRequest, GENERATION_TEMPERATURE};
pub use crate::service::PromptService;
pub use crate::session::SessionState;
pub use crate::settings::{
    CulturalFocus, LightingMood, OutputStyle, Perspective, SelectOption, Settings,
};
pub use crate::types::{GenerationRequest, ImageInput, ImageMimeType};
