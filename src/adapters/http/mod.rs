//! Marketplace backend HTTP adapter.
//!
//! Implements the [`CategorySource`](crate::domain::ports::CategorySource)
//! port over the backend's REST category listing.

pub mod client;
pub mod models;

pub use client::HttpCategorySource;
pub use models::CategoryListResponse;
