//! PostgreSQL adapter
//!
//! Pooled client plus the trait implementations for the relational sink and
//! the processed-object ledger.

pub mod client;
pub mod ledger;
pub mod sink;

pub use client::PostgresClient;
pub use ledger::PostgresLedger;
pub use sink::PostgresSink;
