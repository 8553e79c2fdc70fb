pub mod category;
pub mod config;

pub use category::{normalize_slug, Category};
pub use config::{
    BackendConfig, CacheConfig, Config, FailurePolicy, LoggingConfig, RetryConfig,
};
