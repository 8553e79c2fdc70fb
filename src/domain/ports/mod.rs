//! Port trait definitions (Hexagonal Architecture)
//!
//! - CategorySource: fetches the category listing from the backend
//!
//! The cache depends only on these traits, so tests can swap the HTTP
//! adapter for an in-process source.

pub mod category_source;

pub use category_source::CategorySource;
