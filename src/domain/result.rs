//! Result type alias for Pulse

use super::errors::PulseError;

/// Result type alias for Pulse operations
///
/// This is a convenience type alias that uses `PulseError` as the error type.
/// Use this throughout the codebase for fallible operations.
pub type Result<T> = std::result::Result<T, PulseError>;
