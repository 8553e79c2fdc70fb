//! Backend response envelopes.
//!
//! These structs map to the backend's JSON payloads and stay internal to
//! the HTTP adapter.

use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Category;

/// Envelope returned by the category listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryListResponse {
    /// Whether the backend handled the request.
    pub success: bool,
    /// Category records; absent on most failures.
    #[serde(default)]
    pub data: Option<Vec<Category>>,
    /// Optional error description from the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CategoryListResponse {
    /// Unwrap the envelope into its records.
    ///
    /// `success: false` is a rejection; `success: true` without `data` is
    /// a malformed payload.
    pub fn into_categories(self) -> DomainResult<Vec<Category>> {
        if !self.success {
            return Err(DomainError::UpstreamRejected(
                self.message
                    .unwrap_or_else(|| "success: false".to_string()),
            ));
        }

        self.data.ok_or_else(|| {
            DomainError::MalformedPayload("response is missing `data`".to_string())
        })
    }
}
