//! Domain models and types for Pulse.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`RecordId`], [`PatientId`], [`ObjectKey`])
//! - **Record models** ([`VitalRecord`], [`EvaluatedRecord`])
//! - **Evaluation categories** ([`BloodPressureCategory`], [`VitalCategory`])
//! - **Error types** ([`PulseError`], [`StorageError`], [`PersistenceError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Pulse uses the newtype pattern for identifiers to prevent mixing different
//! ID types, and an explicitly-typed record structure so that the absence of
//! a required field is a checked construction-time error
//! ([`PulseError::MissingField`]) rather than a runtime key-lookup failure.

pub mod errors;
pub mod evaluation;
pub mod ids;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{PersistenceError, PulseError, StorageError};
pub use evaluation::{BloodPressureCategory, VitalCategory};
pub use ids::{ObjectKey, PatientId, RecordId};
pub use record::{parse_batch, EvaluatedRecord, VitalRecord};
pub use result::Result;
