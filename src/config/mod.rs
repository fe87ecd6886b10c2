//! Configuration management for Pulse.
//!
//! TOML-based configuration loading, parsing, and validation with support
//! for environment variable substitution (`${VAR_NAME}`) and `PULSE_*`
//! environment variable overrides.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! name = "pulse"
//! log_level = "info"
//!
//! [storage]
//! bucket = "ruth-hosp"
//! source_prefix = "data_request/"
//! output_prefix = "output/"
//!
//! [postgres]
//! connection_string = "${PULSE_POSTGRES_CONNECTION_STRING}"
//! max_connections = 10
//!
//! [ingest]
//! ledger_enabled = true
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, IngestConfig, LoggingConfig, PostgresConfig, PulseConfig, SimulateConfig,
    StorageConfig,
};
