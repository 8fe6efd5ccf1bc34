//! Core request data types.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::VireoError;
use crate::settings::Settings;

/// MIME types accepted for reference images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageMimeType {
    Jpeg,
    Png,
}

impl ImageMimeType {
    /// Parse a declared MIME type, rejecting anything outside the accepted set.
    pub fn parse(mime_type: &str) -> Result<Self, VireoError> {
        match mime_type {
            "image/jpeg" => Ok(Self::Jpeg),
            "image/png" => Ok(Self::Png),
            other => Err(VireoError::InvalidInput(format!(
                "Please upload a valid image file (JPG, PNG); got '{other}'."
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

/// A reference image, base64-encoded and ready for multimodal submission.
///
/// Owned transiently by the caller for the duration of one request; never
/// persisted by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    /// Base64-encoded image bytes.
    pub data: String,
    pub mime_type: ImageMimeType,
}

impl ImageInput {
    /// Encode raw bytes with their declared MIME type.
    ///
    /// The MIME type is re-validated here even when a UI boundary already
    /// checked it; unsupported types fail fast before any request is built.
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Result<Self, VireoError> {
        let mime_type = ImageMimeType::parse(mime_type)?;
        Ok(Self {
            data: STANDARD.encode(bytes),
            mime_type,
        })
    }

    /// Wrap already-encoded base64 data.
    pub fn from_base64(data: impl Into<String>, mime_type: ImageMimeType) -> Self {
        Self {
            data: data.into(),
            mime_type,
        }
    }
}

/// A single generation request; exactly one variant per call.
///
/// Image-based generation ignores any free-text prompt — the two paths are
/// never merged into one multimodal optimization request.
#[derive(Debug, Clone)]
pub enum GenerationRequest {
    TextOptimization {
        base_prompt: String,
        settings: Settings,
        has_image: bool,
    },
    ImageAnalysis {
        image: ImageInput,
    },
}
