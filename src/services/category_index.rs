//! Process-wide category slug/id index.
//!
//! Resolves URL slugs to backend category ids (and ids to full records)
//! without a network round-trip per page render. The index is populated by
//! a single fetch of the backend category listing and then served from
//! memory for the life of the process.
//!
//! Both maps and the preloaded flag live behind one `RwLock`; loaders are
//! serialized by a separate gate so concurrent first calls share one fetch.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use backoff::backoff::Backoff;
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{normalize_slug, CacheConfig, Category, FailurePolicy, RetryConfig};
use crate::domain::ports::CategorySource;

/// Process-wide cache instance, installed once at startup.
static GLOBAL_INDEX: OnceLock<Arc<CategoryIndexCache>> = OnceLock::new();

/// Install the process-wide cache.
///
/// Returns the rejected cache if one was already installed.
pub fn install_global(cache: Arc<CategoryIndexCache>) -> Result<(), Arc<CategoryIndexCache>> {
    GLOBAL_INDEX.set(cache)
}

/// The process-wide cache, if one has been installed.
pub fn global() -> Option<Arc<CategoryIndexCache>> {
    GLOBAL_INDEX.get().cloned()
}

/// Diagnostic snapshot of the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreloadStatus {
    /// Whether preloading has completed (successfully or settled after failure).
    pub preloaded: bool,
    /// Number of records in the id index.
    pub categories: usize,
    /// Upstream failures since the last successful load.
    pub consecutive_failures: u32,
    /// When the current index was loaded.
    pub loaded_at: Option<DateTime<Utc>>,
}

/// The two lookup maps.
#[derive(Debug, Default)]
struct Index {
    slug_to_id: HashMap<String, String>,
    by_id: HashMap<String, Arc<Category>>,
}

impl Index {
    /// Build an index from a listing, skipping records without slug or id.
    fn build(categories: Vec<Category>) -> Self {
        let mut index = Self::default();
        let mut skipped = 0usize;

        for category in categories {
            if !category.is_indexable() {
                skipped += 1;
                continue;
            }

            let slug = category.normalized_slug();
            let id = category.id.clone();
            if let Some(previous) = index.slug_to_id.insert(slug.clone(), id.clone()) {
                if previous != id {
                    debug!(%slug, %previous, replacement = %id, "duplicate category slug");
                }
            }
            index.by_id.insert(id, Arc::new(category));
        }

        if skipped > 0 {
            debug!(skipped, "skipped categories without slug or id");
        }
        index
    }
}

#[derive(Debug, Default)]
struct IndexState {
    index: Index,
    preloaded: bool,
    consecutive_failures: u32,
    loaded_at: Option<DateTime<Utc>>,
}

/// Backoff bookkeeping, only touched while holding the load gate.
struct LoadGate {
    backoff: ExponentialBackoff,
    next_attempt_at: Option<Instant>,
}

impl LoadGate {
    fn new(retry: &RetryConfig) -> Self {
        let backoff = ExponentialBackoffBuilder::new()
            .with_initial_interval(Duration::from_millis(retry.initial_backoff_ms))
            .with_max_interval(Duration::from_millis(retry.max_backoff_ms))
            .with_multiplier(2.0)
            .with_randomization_factor(0.0)
            .with_max_elapsed_time(None)
            .build();

        Self {
            backoff,
            next_attempt_at: None,
        }
    }

    fn reset(&mut self) {
        self.backoff.reset();
        self.next_attempt_at = None;
    }
}

/// In-memory bidirectional category index with one-shot preload.
pub struct CategoryIndexCache {
    source: Arc<dyn CategorySource>,
    policy: FailurePolicy,
    max_retries: u32,
    state: RwLock<IndexState>,
    gate: Mutex<LoadGate>,
}

impl std::fmt::Debug for CategoryIndexCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryIndexCache")
            .field("policy", &self.policy)
            .field("max_retries", &self.max_retries)
            .finish_non_exhaustive()
    }
}

impl CategoryIndexCache {
    /// Create an empty cache with the default (fail-fast) policy.
    pub fn new(source: Arc<dyn CategorySource>) -> Self {
        Self::with_config(source, &CacheConfig::default())
    }

    /// Create an empty cache with an explicit failure policy.
    pub fn with_config(source: Arc<dyn CategorySource>, config: &CacheConfig) -> Self {
        Self {
            source,
            policy: config.failure_policy,
            max_retries: config.retry.max_retries,
            state: RwLock::new(IndexState::default()),
            gate: Mutex::new(LoadGate::new(&config.retry)),
        }
    }

    /// Populate the index from the upstream listing, once.
    ///
    /// Returns immediately when already preloaded. Upstream failures are
    /// logged and absorbed; what happens next depends on the failure policy.
    pub async fn preload(&self) {
        if self.state.read().await.preloaded {
            return;
        }

        let mut gate = self.gate.lock().await;

        // Another caller may have finished while we waited on the gate.
        if self.state.read().await.preloaded {
            return;
        }

        if let Some(at) = gate.next_attempt_at {
            let now = Instant::now();
            if now < at {
                debug!(
                    retry_in_ms = at.duration_since(now).as_millis() as u64,
                    "category preload backing off"
                );
                return;
            }
        }

        match self.source.fetch_categories().await {
            Ok(categories) => {
                gate.reset();
                let count = self.install(Index::build(categories)).await;
                info!(categories = count, "category index preloaded");
            }
            Err(err) => self.record_failure(&mut gate, &err).await,
        }
    }

    /// Swap in a freshly built index and mark the cache preloaded.
    async fn install(&self, index: Index) -> usize {
        let count = index.by_id.len();
        let mut state = self.state.write().await;
        state.index = index;
        state.preloaded = true;
        state.consecutive_failures = 0;
        state.loaded_at = Some(Utc::now());
        count
    }

    async fn record_failure(&self, gate: &mut LoadGate, err: &DomainError) {
        let mut state = self.state.write().await;
        state.consecutive_failures = state.consecutive_failures.saturating_add(1);
        let failures = state.consecutive_failures;

        match self.policy {
            FailurePolicy::FailFast => {
                state.preloaded = true;
                error!(
                    error = %err,
                    "category preload failed; category resolution disabled until invalidated"
                );
            }
            FailurePolicy::RetryWithBackoff if failures > self.max_retries => {
                state.preloaded = true;
                gate.next_attempt_at = None;
                error!(
                    error = %err,
                    consecutive_failures = failures,
                    "category preload retries exhausted; category resolution disabled until invalidated"
                );
            }
            FailurePolicy::RetryWithBackoff => {
                let delay = gate
                    .backoff
                    .next_backoff()
                    .unwrap_or(gate.backoff.max_interval);
                gate.next_attempt_at = Some(Instant::now() + delay);
                warn!(
                    error = %err,
                    consecutive_failures = failures,
                    retry_in_ms = delay.as_millis() as u64,
                    "category preload failed; will retry"
                );
            }
        }
    }

    /// Drop the index and the preloaded flag so the next `preload` fetches again.
    pub async fn invalidate(&self) {
        let mut gate = self.gate.lock().await;
        gate.reset();
        *self.state.write().await = IndexState::default();
        info!("category index invalidated");
    }

    /// Fetch the listing now and replace the index.
    ///
    /// Unlike [`preload`](Self::preload), failures are returned and the
    /// previous index stays in place. A failure still counts toward
    /// [`PreloadStatus::consecutive_failures`].
    pub async fn refresh(&self) -> DomainResult<usize> {
        let mut gate = self.gate.lock().await;

        match self.source.fetch_categories().await {
            Ok(categories) => {
                gate.reset();
                let count = self.install(Index::build(categories)).await;
                info!(categories = count, "category index refreshed");
                Ok(count)
            }
            Err(err) => {
                let mut state = self.state.write().await;
                state.consecutive_failures = state.consecutive_failures.saturating_add(1);
                warn!(
                    error = %err,
                    consecutive_failures = state.consecutive_failures,
                    "category refresh failed; keeping previous index"
                );
                Err(err)
            }
        }
    }

    /// Resolve a slug to its category id.
    pub async fn lookup_id_by_slug(&self, slug: &str) -> Option<String> {
        let key = normalize_slug(slug);
        self.state.read().await.index.slug_to_id.get(&key).cloned()
    }

    /// Resolve a slug to its full category record.
    pub async fn lookup_category_by_slug(&self, slug: &str) -> Option<Arc<Category>> {
        let key = normalize_slug(slug);
        let state = self.state.read().await;
        let id = state.index.slug_to_id.get(&key)?;
        state.index.by_id.get(id).cloned()
    }

    /// Look up a category by its backend id.
    pub async fn lookup_category_by_id(&self, id: &str) -> Option<Arc<Category>> {
        self.state.read().await.index.by_id.get(id).cloned()
    }

    /// Human-readable name for a slug.
    pub async fn name_for_slug(&self, slug: &str) -> Option<String> {
        self.lookup_category_by_slug(slug)
            .await
            .map(|category| category.name.clone())
    }

    /// Direct subcategories of `parent_id`, sorted by name.
    pub async fn children_of(&self, parent_id: &str) -> Vec<Arc<Category>> {
        self.collect_sorted(|category| category.has_parent(parent_id))
            .await
    }

    /// Categories without a parent, sorted by name.
    pub async fn top_level(&self) -> Vec<Arc<Category>> {
        self.collect_sorted(Category::is_top_level).await
    }

    /// Every cached category, sorted by name.
    pub async fn all(&self) -> Vec<Arc<Category>> {
        self.collect_sorted(|_| true).await
    }

    async fn collect_sorted<F>(&self, keep: F) -> Vec<Arc<Category>>
    where
        F: Fn(&Category) -> bool,
    {
        let state = self.state.read().await;
        let mut categories: Vec<_> = state
            .index
            .by_id
            .values()
            .filter(|category| keep(category))
            .cloned()
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        categories
    }

    /// Number of cached records.
    pub async fn len(&self) -> usize {
        self.state.read().await.index.by_id.len()
    }

    /// Whether the index holds no records.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Whether preloading has completed.
    pub async fn is_preloaded(&self) -> bool {
        self.state.read().await.preloaded
    }

    /// Diagnostic snapshot.
    pub async fn status(&self) -> PreloadStatus {
        let state = self.state.read().await;
        PreloadStatus {
            preloaded: state.preloaded,
            categories: state.index.by_id.len(),
            consecutive_failures: state.consecutive_failures,
            loaded_at: state.loaded_at,
        }
    }
}
