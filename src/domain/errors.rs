//! Domain error types
//!
//! This module defines the error hierarchy for Pulse. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Pulse error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum PulseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A required field is absent (or non-numeric) in a raw record
    #[error("Missing required field '{field}' in record {record}")]
    MissingField { field: String, record: String },

    /// Tabular export field-set mismatch within a batch
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    /// Malformed batch payload
    #[error("Parse error: {0}")]
    Parse(String),

    /// A vital measurement could not be classified by any rule
    #[error("Evaluation error: {0}")]
    Evaluation(String),

    /// Object-storage read/write errors
    #[error("Transfer error: {0}")]
    Transfer(#[from] StorageError),

    /// Relational write failures
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Database-related errors outside batch persistence (pool, DDL)
    #[error("Database error: {0}")]
    Database(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Object-storage specific errors
///
/// Errors that occur when interacting with the object store.
/// These errors don't expose third-party SDK types.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failed to list objects under a prefix
    #[error("Failed to list objects under '{prefix}': {message}")]
    ListFailed { prefix: String, message: String },

    /// Failed to read object bytes
    #[error("Failed to get object '{key}': {message}")]
    GetFailed { key: String, message: String },

    /// Failed to write object bytes
    #[error("Failed to put object '{key}': {message}")]
    PutFailed { key: String, message: String },

    /// Object exists but has no content
    #[error("Object '{0}' is empty")]
    EmptyObject(String),

    /// Object not found
    #[error("Object '{0}' not found")]
    NotFound(String),
}

/// Relational-sink specific errors
///
/// Any of these aborts the whole batch transaction; callers must treat the
/// batch as fully unwritten.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Failed to obtain a connection
    #[error("Failed to connect to the relational store: {0}")]
    ConnectionFailed(String),

    /// Failed to open or commit the batch transaction
    #[error("Batch transaction failed: {0}")]
    TransactionFailed(String),

    /// A row insert failed (constraint violation or execution error)
    #[error("Insert failed for record {record}: {message}")]
    InsertFailed { record: String, message: String },
}

// Conversion from std::io::Error
impl From<std::io::Error> for PulseError {
    fn from(err: std::io::Error) -> Self {
        PulseError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PulseError {
    fn from(err: serde_json::Error) -> Self {
        PulseError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for PulseError {
    fn from(err: toml::de::Error) -> Self {
        PulseError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from csv writer errors
impl From<csv::Error> for PulseError {
    fn from(err: csv::Error) -> Self {
        PulseError::Serialization(format!("CSV error: {err}"))
    }
}
