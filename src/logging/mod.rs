//! Logging and observability
//!
//! Structured logging with JSON-formatted file output, configurable log
//! levels, and local file rotation.
//!
//! # Example
//!
//! ```no_run
//! use pulse::logging::init_logging;
//! use pulse::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
