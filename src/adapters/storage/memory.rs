//! In-memory object store
//!
//! Backs tests and dry runs. Keys are held in a sorted map so listings are
//! deterministic.

use crate::adapters::storage::{ObjectStore, ObjectSummary};
use crate::domain::errors::StorageError;
use crate::domain::ids::ObjectKey;
use crate::domain::result::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Map-backed object store
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an object directly, bypassing the trait
    pub fn insert(&self, key: impl Into<String>, bytes: Vec<u8>) {
        self.objects.lock().unwrap().insert(key.into(), bytes);
    }

    /// True when an object exists under `key`
    pub fn contains(&self, key: &str) -> bool {
        self.objects.lock().unwrap().contains_key(key)
    }

    /// Returns a copy of an object's bytes, if present
    pub fn bytes(&self, key: &str) -> Option<Vec<u8>> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    /// All stored keys, sorted
    pub fn keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn list(&self, prefix: &str) -> Result<Vec<ObjectSummary>> {
        let objects = self.objects.lock().unwrap();
        let mut summaries = Vec::new();

        for (key, bytes) in objects.range(prefix.to_string()..) {
            if !key.starts_with(prefix) {
                break;
            }
            summaries.push(ObjectSummary {
                key: ObjectKey::new(key.clone()).expect("stored keys are non-empty"),
                size: bytes.len() as i64,
            });
        }

        Ok(summaries)
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        self.objects
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(key.to_string()).into())
    }

    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<()> {
        self.objects.lock().unwrap().insert(key.to_string(), bytes);
        Ok(())
    }
}
