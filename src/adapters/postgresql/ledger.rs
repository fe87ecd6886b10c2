//! PostgreSQL processed-object ledger

use crate::adapters::database::traits::ProcessedLedger;
use crate::adapters::postgresql::client::PostgresClient;
use crate::domain::result::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Ledger backed by the `processed_objects` table
pub struct PostgresLedger {
    client: Arc<PostgresClient>,
}

impl PostgresLedger {
    /// Create a new ledger over a pooled client
    pub fn new(client: Arc<PostgresClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProcessedLedger for PostgresLedger {
    async fn is_processed(&self, key: &str) -> Result<bool> {
        let query = "SELECT EXISTS(SELECT 1 FROM processed_objects WHERE object_key = $1)";
        let rows = self.client.query(query, &[&key]).await?;

        Ok(rows.first().map(|row| row.get(0)).unwrap_or(false))
    }

    async fn mark_processed(&self, key: &str) -> Result<()> {
        // Re-marking an already-processed key is a no-op.
        let statement = r#"
            INSERT INTO processed_objects (object_key)
            VALUES ($1)
            ON CONFLICT (object_key) DO NOTHING
        "#;
        self.client.execute(statement, &[&key]).await?;

        tracing::debug!(key = key, "Source object recorded in ledger");
        Ok(())
    }
}
