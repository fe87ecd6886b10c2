//! Patient monitoring simulation
//!
//! Generates a synthetic ward feed: a drifting patient population whose
//! readings are uploaded as pending batches for the ingestion pipeline.

pub mod generator;
pub mod runner;

pub use generator::{batch_file_name, generate_patient, generate_population, update_vitals};
pub use runner::Simulator;
