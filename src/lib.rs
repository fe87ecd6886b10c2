// Pulse - Patient Vital Signs Pipeline
// Copyright (c) 2026 Pulse Contributors
// Licensed under the MIT License

//! # Pulse - Patient Vital Signs Pipeline
//!
//! Pulse ingests batches of patient vital-sign readings from object storage,
//! classifies each reading against clinical thresholds, archives the
//! evaluated batches as CSV, and persists them to PostgreSQL for analytics.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Evaluating** vital signs (blood pressure, heart rate, blood sugar,
//!   blood oxygen, body temperature) into clinical categories
//! - **Exporting** evaluated batches as flat CSV artifacts
//! - **Persisting** batches transactionally to a relational store
//! - **Simulating** a live ward feed for end-to-end exercise
//!
//! ## Architecture
//!
//! Pulse follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (evaluate, export, ingest, simulate)
//! - [`adapters`] - External integrations (object storage, PostgreSQL)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pulse::adapters::postgresql::{PostgresClient, PostgresSink};
//! use pulse::adapters::storage::S3Store;
//! use pulse::config::load_config;
//! use pulse::core::ingest::IngestCoordinator;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("pulse.toml")?;
//!
//!     let store = Arc::new(S3Store::new(&config.storage).await?);
//!     let client = Arc::new(PostgresClient::new(config.postgres.clone()).await?);
//!     let sink = Arc::new(PostgresSink::new(client));
//!
//!     let coordinator = IngestCoordinator::new(store, sink, None, &config);
//!     let summary = coordinator.execute_ingest().await?;
//!
//!     println!("Ingested {} records", summary.records_persisted);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
