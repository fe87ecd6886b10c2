//! Ingest command implementation
//!
//! This module implements the `ingest` command: one run over the pending
//! batches under the source prefix, evaluating vitals, archiving CSVs, and
//! persisting rows to PostgreSQL.

use crate::adapters::database::traits::ProcessedLedger;
use crate::adapters::postgresql::{PostgresClient, PostgresLedger, PostgresSink};
use crate::adapters::storage::S3Store;
use crate::config::load_config;
use crate::core::ingest::IngestCoordinator;
use clap::Args;
use std::sync::Arc;

/// Arguments for the ingest command
#[derive(Args, Debug)]
pub struct IngestArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Dry run mode - evaluate batches without uploading or persisting
    #[arg(long)]
    pub dry_run: bool,

    /// Disable the processed-object ledger for this run
    #[arg(long)]
    pub no_ledger: bool,
}

impl IngestArgs {
    /// Execute the ingest command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting ingest command");

        // Load configuration
        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Configuration loading failed");
                eprintln!("Configuration loading failed: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Apply CLI overrides
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.ingest.dry_run = true;
        }
        if self.no_ledger {
            tracing::info!("Disabling processed-object ledger from CLI");
            config.ingest.ledger_enabled = false;
        }

        if config.ingest.dry_run {
            println!("🔍 DRY RUN MODE - No data will be uploaded or persisted");
            println!();
        }

        // Confirmation prompt (unless --yes or dry-run)
        if !self.yes && !config.ingest.dry_run {
            println!("Ingest Configuration:");
            println!("  Bucket: {}", config.storage.bucket);
            println!("  Source prefix: {}", config.storage.source_prefix);
            println!("  Output prefix: {}", config.storage.output_prefix);
            println!("  Ledger enabled: {}", config.ingest.ledger_enabled);
            println!();
            print!("Proceed with ingestion? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Ingestion cancelled.");
                return Ok(0);
            }
        }

        // Connect to the object store
        let store = match S3Store::new(&config.storage).await {
            Ok(s) => Arc::new(s),
            Err(e) => {
                tracing::error!(error = %e, "Failed to create object store client");
                eprintln!("Failed to connect to object storage: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        // Connect to PostgreSQL and bootstrap the schema
        let client = match PostgresClient::new(config.postgres.clone()).await {
            Ok(c) => Arc::new(c),
            Err(e) => {
                tracing::error!(error = %e, "Failed to create PostgreSQL client");
                eprintln!("Failed to connect to PostgreSQL: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        if !config.ingest.dry_run {
            if let Err(e) = client.test_connection().await {
                tracing::error!(error = %e, "PostgreSQL connection test failed");
                eprintln!("PostgreSQL connection test failed: {e}");
                return Ok(4);
            }
            if let Err(e) = client.ensure_schema_exists().await {
                tracing::error!(error = %e, "Schema bootstrap failed");
                eprintln!("Schema bootstrap failed: {e}");
                return Ok(4);
            }
        }

        let sink = Arc::new(PostgresSink::new(client.clone()));
        let ledger: Option<Arc<dyn ProcessedLedger>> = if config.ingest.ledger_enabled {
            Some(Arc::new(PostgresLedger::new(client.clone())))
        } else {
            None
        };

        let coordinator = IngestCoordinator::new(store, sink, ledger, &config);

        tracing::info!("Executing ingestion run");
        println!("🚀 Starting ingestion...");
        println!();

        let summary = match coordinator.execute_ingest().await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Ingestion failed");
                eprintln!("Ingestion failed: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        // Display summary
        let (status, message) = summary.completion();
        println!();
        println!("📊 Ingest Summary:");
        println!("  Objects discovered: {}", summary.objects_discovered);
        println!("  Objects ingested: {}", summary.objects_done);
        println!("  Objects skipped: {}", summary.objects_skipped);
        println!("  Duplicates skipped: {}", summary.duplicates_skipped);
        println!("  Records persisted: {}", summary.records_persisted);
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!("  Status: {status} {message}");
        println!();

        if !summary.errors.is_empty() {
            println!("⚠️  Errors encountered:");
            for error in &summary.errors {
                println!("  - {:?} [{}]: {}", error.error_type, error.key, error.message);
            }
            println!();
        }

        let exit_code = if summary.is_successful() {
            println!("✅ Ingestion completed successfully!");
            0
        } else {
            println!("⚠️  Ingestion completed with failures");
            1 // Partial success
        };

        Ok(exit_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_args_defaults() {
        let args = IngestArgs {
            yes: false,
            dry_run: false,
            no_ledger: false,
        };

        assert!(!args.yes);
        assert!(!args.dry_run);
        assert!(!args.no_ledger);
    }
}
