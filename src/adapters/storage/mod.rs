//! Object storage abstraction
//!
//! Pending raw batches and archived exports live in an object store. The
//! [`ObjectStore`] trait is the seam between the ingestion pipeline and the
//! storage backend: S3 in production ([`s3::S3Store`]), an in-memory map for
//! tests and dry runs ([`memory::MemoryStore`]).

pub mod memory;
pub mod s3;

use crate::domain::ids::ObjectKey;
use crate::domain::result::Result;
use async_trait::async_trait;

pub use memory::MemoryStore;
pub use s3::S3Store;

/// A listed object: its key and payload size in bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSummary {
    pub key: ObjectKey,
    pub size: i64,
}

/// Object storage operations used by the pipeline
///
/// All calls are blocking from the pipeline's point of view: the coordinator
/// awaits each operation before moving on. No timeouts are enforced here;
/// they are a property of the backend client.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Lists objects under a key prefix, in the backend's listing order
    async fn list(&self, prefix: &str) -> Result<Vec<ObjectSummary>>;

    /// Reads an object's bytes
    async fn get(&self, key: &str) -> Result<Vec<u8>>;

    /// Writes an object's bytes
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<()>;
}
