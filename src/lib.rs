//! Storefront Catalog - category index for the marketplace storefront
//!
//! Server-rendered storefront pages address categories by URL slug, while
//! the backend's product queries need category ids. This crate keeps a
//! process-wide, read-mostly index of the backend category listing so that
//! slug resolution never costs a network round-trip after startup.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): category model, configuration, errors, ports
//! - **Adapters** (`adapters`): reqwest-backed category source
//! - **Service Layer** (`services`): `CategoryIndexCache`
//! - **Application Layer** (`application`): startup bootstrap
//! - **Infrastructure Layer** (`infrastructure`): config loading, logging
//! - **CLI Layer** (`cli`): `catalog` command-line interface
//!
//! # Example
//!
//! ```ignore
//! use storefront_catalog::{bootstrap, ConfigLoader};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     let categories = bootstrap(&config).await?;
//!     let id = categories.lookup_id_by_slug("safety-security").await;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::http::HttpCategorySource;
pub use application::{bootstrap, bootstrap_with_source};
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    normalize_slug, BackendConfig, CacheConfig, Category, Config, FailurePolicy, LoggingConfig,
    RetryConfig,
};
pub use domain::ports::CategorySource;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{CategoryIndexCache, PreloadStatus};
