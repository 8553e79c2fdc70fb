//! Category source port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::Category;

/// Upstream provider of the full category listing.
#[async_trait]
pub trait CategorySource: Send + Sync {
    /// Fetch every category the backend knows about.
    async fn fetch_categories(&self) -> DomainResult<Vec<Category>>;
}
