//! Error types for Vireo.

use thiserror::Error;

/// Primary error type for all Vireo operations.
#[derive(Error, Debug)]
pub enum VireoError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Caller-supplied input was rejected before any network call.
    /// The message is directly user-displayable.
    #[error("{0}")]
    InvalidInput(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: retry after {retry_after_ms:?}ms")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    /// Another request already holds the single session slot.
    #[error("Another request is already in progress")]
    Busy,

    /// Boundary error carrying the fixed user-facing failure message.
    /// The classified cause is logged, never surfaced.
    #[error("{0}")]
    Generation(String),
}

/// Broad error category for routing recovery logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    RateLimit,
    Network,
    Timeout,
    Server,
    Api,
    Configuration,
    Serialization,
    Input,
    Busy,
    Unknown,
}

impl VireoError {
    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Authentication(_) => ErrorCategory::Authentication,
            Self::RateLimited { .. } => ErrorCategory::RateLimit,
            Self::Network(_) => ErrorCategory::Network,
            Self::Timeout(_) => ErrorCategory::Timeout,
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Serialization(_) => ErrorCategory::Serialization,
            Self::InvalidInput(_) => ErrorCategory::Input,
            Self::Busy => ErrorCategory::Busy,
            Self::Api { status, .. } => match status {
                401 | 403 => ErrorCategory::Authentication,
                429 => ErrorCategory::RateLimit,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Api,
            },
            Self::Generation(_) => ErrorCategory::Unknown,
        }
    }

    /// Whether this error is potentially retryable (by the user; the core
    /// never retries on its own).
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::RateLimit
                | ErrorCategory::Network
                | ErrorCategory::Timeout
                | ErrorCategory::Server
                | ErrorCategory::Busy
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, VireoError>;
