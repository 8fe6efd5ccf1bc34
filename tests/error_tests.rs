//! Tests for error classification.

use vireo::error::{ErrorCategory, VireoError};

#[test]
fn api_status_drives_category() {
    let auth = VireoError::Api {
        status: 403,
        message: "forbidden".to_string(),
    };
    assert_eq!(auth.category(), ErrorCategory::Authentication);

    let rate = VireoError::Api {
        status: 429,
        message: "slow down".to_string(),
    };
    assert_eq!(rate.category(), ErrorCategory::RateLimit);

    let server = VireoError::Api {
        status: 503,
        message: "unavailable".to_string(),
    };
    assert_eq!(server.category(), ErrorCategory::Server);

    let client = VireoError::Api {
        status: 400,
        message: "bad request".to_string(),
    };
    assert_eq!(client.category(), ErrorCategory::Api);
}

#[test]
fn retryability_follows_category() {
    assert!(VireoError::Timeout(60_000).is_retryable());
    assert!(VireoError::RateLimited {
        retry_after_ms: None
    }
    .is_retryable());
    assert!(VireoError::Busy.is_retryable());

    assert!(!VireoError::Configuration("no key".to_string()).is_retryable());
    assert!(!VireoError::InvalidInput("empty".to_string()).is_retryable());
    assert!(!VireoError::Authentication("bad key".to_string()).is_retryable());
}

#[test]
fn invalid_input_displays_message_verbatim() {
    let err = VireoError::InvalidInput("Please provide a base prompt or an image.".to_string());
    assert_eq!(err.to_string(), "Please provide a base prompt or an image.");
}

#[test]
fn generation_error_displays_only_the_boundary_message() {
    let err = VireoError::Generation(
        "Failed to optimize prompt. Please check your API key and try again.".to_string(),
    );
    assert_eq!(
        err.to_string(),
        "Failed to optimize prompt. Please check your API key and try again."
    );
}
