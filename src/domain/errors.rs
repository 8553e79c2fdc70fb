//! Domain errors for the storefront catalog.

use thiserror::Error;

/// Domain-level errors that can occur while resolving categories.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Transport-level failure reaching the backend.
    #[error("Upstream request failed: {0}")]
    UpstreamRequest(String),

    /// Backend answered with a non-success HTTP status.
    #[error("Upstream returned {status}: {body}")]
    UpstreamStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// Backend envelope carried `success: false`.
    #[error("Upstream rejected the request: {0}")]
    UpstreamRejected(String),

    /// Response body could not be decoded.
    #[error("Malformed upstream payload: {0}")]
    MalformedPayload(String),

    /// No category matches the given slug or id.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Input rejected before reaching the backend.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

/// Result alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::MalformedPayload(err.to_string())
    }
}

impl From<reqwest::Error> for DomainError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            DomainError::MalformedPayload(err.to_string())
        } else {
            DomainError::UpstreamRequest(err.to_string())
        }
    }
}

impl DomainError {
    /// Whether the error came from talking to the backend rather than from
    /// local validation or a lookup miss.
    pub const fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::UpstreamRequest(_)
                | Self::UpstreamStatus { .. }
                | Self::UpstreamRejected(_)
                | Self::MalformedPayload(_)
        )
    }
}
