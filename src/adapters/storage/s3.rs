//! S3 implementation of the object store
//!
//! Wraps the AWS SDK client. Errors are mapped to domain [`StorageError`]
//! values so no SDK types leak upward.

use crate::adapters::storage::{ObjectStore, ObjectSummary};
use crate::config::schema::StorageConfig;
use crate::domain::errors::{PulseError, StorageError};
use crate::domain::ids::ObjectKey;
use crate::domain::result::Result;
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;

/// Maximum keys requested per listing call
const MAX_LIST_KEYS: i32 = 1000;

/// S3-backed object store
pub struct S3Store {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3Store {
    /// Creates a store from the ambient AWS configuration
    ///
    /// Credentials and region resolve through the default provider chain.
    /// A custom `endpoint` (MinIO, localstack) switches the client to
    /// path-style addressing.
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        let sdk_config = aws_config::load_from_env().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config);
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        let client = aws_sdk_s3::Client::from_conf(builder.build());

        Ok(Self {
            client,
            bucket: config.bucket.clone(),
        })
    }

    /// The bucket this store operates on
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn list(&self, prefix: &str) -> Result<Vec<ObjectSummary>> {
        let response = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .prefix(prefix)
            .max_keys(MAX_LIST_KEYS)
            .send()
            .await
            .map_err(|e| StorageError::ListFailed {
                prefix: prefix.to_string(),
                message: e.to_string(),
            })?;

        let mut summaries = Vec::new();
        for object in response.contents() {
            let Some(key) = object.key() else { continue };
            let key = ObjectKey::new(key).map_err(|e| PulseError::Parse(e))?;
            summaries.push(ObjectSummary {
                key,
                size: object.size().unwrap_or(0),
            });
        }

        Ok(summaries)
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::GetFailed {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        let bytes = response
            .body
            .collect()
            .await
            .map_err(|e| StorageError::GetFailed {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        Ok(bytes.into_bytes().to_vec())
    }

    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::PutFailed {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(bucket = %self.bucket, key = key, "Object uploaded");
        Ok(())
    }
}
