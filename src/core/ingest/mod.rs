//! Ingestion pipeline
//!
//! The coordinator drives one run over the pending batches: discovery,
//! fetch, parse, evaluate, CSV export, transactional persistence. Results
//! are reported through [`summary::IngestSummary`].

pub mod coordinator;
pub mod summary;

pub use coordinator::IngestCoordinator;
pub use summary::{IngestError, IngestErrorType, IngestSummary};
