//! Service startup for the category index.
//!
//! Builds the HTTP source and cache from configuration, preloads it before
//! the first request is served, and installs it as the process-wide
//! instance. Calling this at startup means request handlers never race
//! each other into the first fetch.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapters::http::HttpCategorySource;
use crate::domain::errors::DomainResult;
use crate::domain::models::{CacheConfig, Config};
use crate::domain::ports::CategorySource;
use crate::services::category_index::{self, CategoryIndexCache};

/// Build, preload and install the process-wide cache from configuration.
///
/// When a cache is already installed it is preloaded (a no-op once loaded)
/// and returned instead of building a second one.
pub async fn bootstrap(config: &Config) -> DomainResult<Arc<CategoryIndexCache>> {
    if let Some(existing) = category_index::global() {
        existing.preload().await;
        return Ok(existing);
    }

    let source = HttpCategorySource::new(&config.backend)?;
    info!(url = source.url(), "bootstrapping category index");
    Ok(bootstrap_with_source(Arc::new(source), &config.cache).await)
}

/// Same as [`bootstrap`] with a caller-supplied source.
pub async fn bootstrap_with_source(
    source: Arc<dyn CategorySource>,
    cache_config: &CacheConfig,
) -> Arc<CategoryIndexCache> {
    let cache = Arc::new(CategoryIndexCache::with_config(source, cache_config));
    cache.preload().await;

    let status = cache.status().await;
    if status.categories == 0 {
        warn!(
            consecutive_failures = status.consecutive_failures,
            "category index is empty after startup preload"
        );
    }

    match category_index::install_global(cache.clone()) {
        Ok(()) => cache,
        Err(_) => {
            // Lost the race to another bootstrap; serve the installed one.
            let installed = category_index::global().unwrap_or(cache);
            installed.preload().await;
            installed
        }
    }
}
