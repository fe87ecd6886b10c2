//! In-memory sink and ledger
//!
//! Test doubles honoring the batch-atomicity contract: a failing sink
//! writes nothing.

use crate::adapters::database::traits::{ProcessedLedger, RecordSink};
use crate::domain::errors::PersistenceError;
use crate::domain::record::EvaluatedRecord;
use crate::domain::result::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Vec-backed record sink
#[derive(Debug, Default)]
pub struct MemorySink {
    rows: Mutex<Vec<EvaluatedRecord>>,
    failing: AtomicBool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent insert fail without writing
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Copy of all persisted rows, in insert order
    pub fn rows(&self) -> Vec<EvaluatedRecord> {
        self.rows.lock().unwrap().clone()
    }

    /// Number of persisted rows
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RecordSink for MemorySink {
    async fn insert_batch(&self, records: &[EvaluatedRecord]) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(PersistenceError::ConnectionFailed(
                "memory sink configured to fail".to_string(),
            )
            .into());
        }

        self.rows.lock().unwrap().extend_from_slice(records);
        Ok(())
    }
}

/// Set-backed processed-object ledger
#[derive(Debug, Default)]
pub struct MemoryLedger {
    keys: Mutex<HashSet<String>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded keys
    pub fn len(&self) -> usize {
        self.keys.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ProcessedLedger for MemoryLedger {
    async fn is_processed(&self, key: &str) -> Result<bool> {
        Ok(self.keys.lock().unwrap().contains(key))
    }

    async fn mark_processed(&self, key: &str) -> Result<()> {
        self.keys.lock().unwrap().insert(key.to_string());
        Ok(())
    }
}
