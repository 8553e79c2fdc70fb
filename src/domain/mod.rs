//! Domain layer for the storefront catalog
//!
//! This module contains the category model, configuration types,
//! domain errors and the port traits adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
