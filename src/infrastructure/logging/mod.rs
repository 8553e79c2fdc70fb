//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty formatting on stderr
//! - Optional daily-rolling JSON log file

pub mod logger;

pub use logger::LoggerImpl;
