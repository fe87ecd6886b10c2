//! Simulate command implementation
//!
//! This module implements the `simulate` command: runs the patient
//! monitoring simulator, uploading synthetic vital-sign batches to the
//! source prefix for later ingestion.

use crate::adapters::storage::S3Store;
use crate::config::load_config;
use crate::core::simulate::Simulator;
use clap::Args;
use std::sync::Arc;

/// Arguments for the simulate command
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Override the number of simulated patients
    #[arg(long)]
    pub patients: Option<usize>,

    /// Override the total runtime in seconds
    #[arg(long)]
    pub runtime: Option<u64>,

    /// Override the seconds between batch uploads
    #[arg(long)]
    pub interval: Option<u64>,
}

impl SimulateArgs {
    /// Execute the simulate command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting simulate command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Configuration loading failed");
                eprintln!("Configuration loading failed: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Apply CLI overrides
        if let Some(patients) = self.patients {
            tracing::info!(patients, "Overriding patient count from CLI");
            config.simulate.patient_count = patients;
        }
        if let Some(runtime) = self.runtime {
            tracing::info!(runtime, "Overriding runtime from CLI");
            config.simulate.runtime_seconds = runtime;
        }
        if let Some(interval) = self.interval {
            tracing::info!(interval, "Overriding interval from CLI");
            config.simulate.interval_seconds = interval;
        }

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        let store = match S3Store::new(&config.storage).await {
            Ok(s) => Arc::new(s),
            Err(e) => {
                tracing::error!(error = %e, "Failed to create object store client");
                eprintln!("Failed to connect to object storage: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        println!("🩺 Starting patient monitoring simulation...");
        println!("  Patients: {}", config.simulate.patient_count);
        println!("  Runtime: {}s", config.simulate.runtime_seconds);
        println!("  Interval: {}s", config.simulate.interval_seconds);
        println!();

        let simulator = Simulator::new(store, &config);
        let uploads = match simulator.run().await {
            Ok(n) => n,
            Err(e) => {
                tracing::error!(error = %e, "Simulation failed");
                eprintln!("Simulation failed: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        println!();
        println!("✅ Simulation finished: {uploads} batch(es) uploaded");
        Ok(0)
    }
}
