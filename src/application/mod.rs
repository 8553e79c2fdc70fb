//! Application layer: startup wiring.

pub mod bootstrap;

pub use bootstrap::{bootstrap, bootstrap_with_source};
