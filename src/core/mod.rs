//! Core pipeline logic
//!
//! The rule engine and batch evaluator (`evaluate`), the tabular export
//! formatter (`export`), the ingestion coordinator (`ingest`), and the
//! synthetic ward feed (`simulate`).

pub mod evaluate;
pub mod export;
pub mod ingest;
pub mod simulate;
