use thiserror::Error;

/// Errors surfaced by the REST client. The store collapses all of these
/// into a single human-readable message; callers that need more detail
/// can match on the variant.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request did not complete (connection, timeout, body decode)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("server returned {status}")]
    Status { status: reqwest::StatusCode },
}
