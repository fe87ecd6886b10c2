//! PostgreSQL record sink
//!
//! Persists an evaluated batch as rows in `patient_data`. The whole batch is
//! written inside one transaction: a connection failure, constraint
//! violation, or failed insert aborts the transaction and leaves the table
//! untouched.

use crate::adapters::database::traits::RecordSink;
use crate::adapters::postgresql::client::PostgresClient;
use crate::domain::errors::PersistenceError;
use crate::domain::record::EvaluatedRecord;
use crate::domain::result::Result;
use async_trait::async_trait;
use std::sync::Arc;

const INSERT_QUERY: &str = r#"
    INSERT INTO patient_data (
        record_id, patient_id, first_name, last_name, dob, check_in_date,
        record_timestamp, systolic_bp, diastolic_bp, heart_rate,
        body_temperature, blood_oxygen, blood_sugar, bp_evaluation,
        heart_rate_eval, blood_sugar_eval, blood_oxygen_eval, body_temp_eval
    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
"#;

/// Transactional PostgreSQL sink
pub struct PostgresSink {
    client: Arc<PostgresClient>,
}

impl PostgresSink {
    /// Create a new sink over a pooled client
    pub fn new(client: Arc<PostgresClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecordSink for PostgresSink {
    async fn insert_batch(&self, records: &[EvaluatedRecord]) -> Result<()> {
        if records.is_empty() {
            tracing::debug!("No records to persist");
            return Ok(());
        }

        let mut connection = self
            .client
            .get_connection()
            .await
            .map_err(|e| PersistenceError::ConnectionFailed(e.to_string()))?;

        let transaction = connection
            .transaction()
            .await
            .map_err(|e| PersistenceError::TransactionFailed(e.to_string()))?;

        let statement = transaction
            .prepare(INSERT_QUERY)
            .await
            .map_err(|e| PersistenceError::TransactionFailed(e.to_string()))?;

        for record in records {
            transaction
                .execute(
                    &statement,
                    &[
                        &record.record.record_id.as_str(),
                        &record.record.patient_id.as_str(),
                        &record.record.first_name,
                        &record.record.last_name,
                        &record.record.dob,
                        &record.record.check_in_date,
                        &record.record.record_timestamp,
                        &record.record.systolic_bp,
                        &record.record.diastolic_bp,
                        &record.record.heart_rate,
                        &record.record.body_temperature,
                        &record.record.blood_oxygen,
                        &record.record.blood_sugar,
                        &record.bp_evaluation.as_str(),
                        &record.heart_rate_eval.as_str(),
                        &record.blood_sugar_eval.as_str(),
                        &record.blood_oxygen_eval.as_str(),
                        &record.body_temp_eval.as_str(),
                    ],
                )
                .await
                .map_err(|e| PersistenceError::InsertFailed {
                    record: record.record_id().to_string(),
                    message: e.to_string(),
                })?;
        }

        // Rollback happens implicitly if commit is never reached.
        transaction
            .commit()
            .await
            .map_err(|e| PersistenceError::TransactionFailed(e.to_string()))?;

        tracing::info!(rows = records.len(), "Batch persisted to PostgreSQL");
        Ok(())
    }
}
