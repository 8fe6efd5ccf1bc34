//! Google Gemini API backend.

use async_trait::async_trait;
use serde::Deserialize;
use strum::{Display, EnumString};
use tracing::debug;

use crate::error::VireoError;
use crate::provider::http::{shared_client, status_to_error};
use crate::provider::{CompletionBackend, CompletionRequest};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini models.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, EnumString)]
pub enum GeminiModel {
    #[strum(serialize = "gemini-2.5-flash")]
    Gemini25Flash,
    #[strum(serialize = "gemini-2.5-pro")]
    Gemini25Pro,
    /// Custom/unknown Gemini model by ID.
    #[strum(default)]
    Custom(String),
}

impl GeminiModel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Gemini25Flash => "gemini-2.5-flash",
            Self::Gemini25Pro => "gemini-2.5-pro",
            Self::Custom(s) => s,
        }
    }
}

impl Default for GeminiModel {
    fn default() -> Self {
        Self::Gemini25Flash
    }
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GoogleClient {
    model: GeminiModel,
    api_key: String,
    base_url: String,
}

impl GoogleClient {
    pub fn new(model: GeminiModel, api_key: String) -> Self {
        Self {
            model,
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Override the endpoint base URL (tests point this at a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build_request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        let mut parts = vec![serde_json::json!({"text": request.user_text})];
        if let Some(ref image) = request.image {
            parts.push(serde_json::json!({
                "inlineData": {
                    "mimeType": image.mime_type.as_str(),
                    "data": image.data,
                }
            }));
        }

        let mut body = serde_json::json!({
            "contents": [{"role": "user", "parts": parts}],
            "generationConfig": {"temperature": request.temperature},
        });
        let obj = body.as_object_mut().unwrap();

        if let Some(ref system) = request.system_instruction {
            obj.insert(
                "systemInstruction".into(),
                serde_json::json!({"parts": [{"text": system}]}),
            );
        }

        body
    }
}

#[async_trait]
impl CompletionBackend for GoogleClient {
    fn model_id(&self) -> &str {
        self.model.as_str()
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, VireoError> {
        let body = self.build_request_body(request);
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            self.model.as_str(),
            self.api_key
        );

        debug!(
            model = self.model.as_str(),
            multimodal = request.image.is_some(),
            "Gemini generateContent"
        );

        let resp = shared_client().post(&url).json(&body).send().await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let data: GeminiResponse = resp.json().await?;

        let candidate = data
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| VireoError::Api {
                status: 200,
                message: "No candidates in Gemini response".to_string(),
            })?;

        let mut text = String::new();
        for part in candidate.content.parts {
            if let Some(t) = part.text {
                text.push_str(&t);
            }
        }

        // An empty result is still a valid result.
        Ok(text.trim().to_string())
    }
}

// Internal Gemini response types

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiPart {
    text: Option<String>,
}
