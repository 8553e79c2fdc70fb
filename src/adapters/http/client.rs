//! HTTP category source backed by reqwest.
//!
//! Issues a single `GET` against the backend's category listing and
//! unwraps the `{ success, data }` envelope.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::{debug, instrument};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{BackendConfig, Category};
use crate::domain::ports::CategorySource;

use super::models::CategoryListResponse;

/// Category source that talks to the marketplace REST backend.
///
/// Errors are mapped as follows:
/// - transport failure -> [`DomainError::UpstreamRequest`]
/// - non-2xx status -> [`DomainError::UpstreamStatus`]
/// - undecodable body or missing `data` -> [`DomainError::MalformedPayload`]
/// - `success: false` -> [`DomainError::UpstreamRejected`]
#[derive(Debug, Clone)]
pub struct HttpCategorySource {
    /// Reusable HTTP client with connection pooling
    http: Client,
    /// Full URL of the category listing endpoint
    url: String,
    /// Optional bearer token
    api_key: Option<String>,
}

impl HttpCategorySource {
    /// Build a source from backend configuration.
    pub fn new(config: &BackendConfig) -> DomainResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                DomainError::ValidationFailed(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            url: config.categories_url(),
            api_key: config.api_key.clone(),
        })
    }

    /// The endpoint this source reads from.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CategorySource for HttpCategorySource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_categories(&self) -> DomainResult<Vec<Category>> {
        let mut req = self
            .http
            .get(&self.url)
            .header(header::ACCEPT, "application/json");
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }

        let resp = req.send().await.map_err(|e| {
            DomainError::UpstreamRequest(format!("category listing request failed: {e}"))
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        let envelope: CategoryListResponse = serde_json::from_str(&body)?;
        let categories = envelope.into_categories()?;

        debug!(count = categories.len(), "fetched category listing");
        Ok(categories)
    }
}
