//! Shared test helpers and mock backend.

use std::sync::Mutex;

use async_trait::async_trait;

use vireo::error::VireoError;
use vireo::provider::{CompletionBackend, CompletionRequest};

/// A mock backend that captures requests and returns queued outcomes.
pub struct MockBackend {
    model_id: String,
    outcomes: Mutex<Vec<Result<String, VireoError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            model_id: "mock-model".to_string(),
            outcomes: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a text response.
    pub fn queue_response(&self, text: &str) {
        self.outcomes.lock().unwrap().push(Ok(text.to_string()));
    }

    /// Queue a failure.
    pub fn queue_error(&self, error: VireoError) {
        self.outcomes.lock().unwrap().push(Err(error));
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionBackend for MockBackend {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, VireoError> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Ok("Mock optimized prompt".to_string()))
    }
}
