//! Database abstraction traits
//!
//! [`RecordSink`] persists evaluated batches; [`ProcessedLedger`] remembers
//! which source objects have already been ingested so a rerun does not
//! duplicate rows. Both are injectable collaborators: PostgreSQL in
//! production, in-memory implementations for tests.

use crate::domain::record::EvaluatedRecord;
use crate::domain::result::Result;
use async_trait::async_trait;

/// Relational sink for evaluated batches
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Persists a whole batch atomically
    ///
    /// All rows commit together or none do; on error the caller must treat
    /// the batch as fully unwritten.
    ///
    /// # Errors
    ///
    /// Returns a `Persistence` error on connection failure, constraint
    /// violation, or any partial write.
    async fn insert_batch(&self, records: &[EvaluatedRecord]) -> Result<()>;
}

/// Ledger of already-ingested source object keys
///
/// Downstream inserts are not idempotent on their own, so the coordinator
/// consults the ledger before reprocessing an object and marks it only after
/// both sinks succeeded.
#[async_trait]
pub trait ProcessedLedger: Send + Sync {
    /// True when `key` has already been ingested
    async fn is_processed(&self, key: &str) -> Result<bool>;

    /// Records `key` as ingested
    async fn mark_processed(&self, key: &str) -> Result<()>;
}
