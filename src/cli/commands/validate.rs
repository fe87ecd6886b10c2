//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Pulse configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates internally; a returned config is valid
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Application: {}", config.application.name);
        println!("  Log Level: {}", config.application.log_level);
        println!("  Bucket: {}", config.storage.bucket);
        if let Some(endpoint) = &config.storage.endpoint {
            println!("  Storage Endpoint: {endpoint}");
        }
        println!("  Source Prefix: {}", config.storage.source_prefix);
        println!("  Output Prefix: {}", config.storage.output_prefix);
        println!(
            "  PostgreSQL Connection: {}",
            config
                .postgres
                .connection_string
                .split('@')
                .next_back()
                .unwrap_or("***")
        );
        println!("  Max Connections: {}", config.postgres.max_connections);
        println!("  Ledger Enabled: {}", config.ingest.ledger_enabled);
        println!("  Simulated Patients: {}", config.simulate.patient_count);
        println!();
        Ok(0)
    }
}
