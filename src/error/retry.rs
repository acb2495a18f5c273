use crate::error::api::ApiError;

/// HTTP statuses the upstream emits for transient conditions. Other 5xx codes
/// are treated as permanent.
const RETRY_STATUS_CODES: [u16; 4] = [500, 502, 503, 504];

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (server errors)
    Retry,
    /// Failed permanently (bad request)
    Fail,
}

impl ApiError {
    /// Determine error retry strategy based upon API error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::Http { status, .. } => {
                if RETRY_STATUS_CODES.contains(&status.as_u16()) {
                    // Upstream is temporarily unavailable or overloaded, backoff
                    // and retry before giving up on the resource.
                    ErrorRetryStrategy::Retry
                } else {
                    // 404 for an ID past the end of the dex, 400 for a malformed
                    // request: the answer will not change on retry.
                    ErrorRetryStrategy::Fail
                }
            }

            // Network error or connection issue - should retry
            Self::Transport { .. } => ErrorRetryStrategy::Retry,

            // The body is already in hand; requesting it again won't make it parse
            Self::Decode { .. } => ErrorRetryStrategy::Fail,

            // Client construction failures happen before any request is made
            Self::Build(_) => ErrorRetryStrategy::Fail,
        }
    }
}
