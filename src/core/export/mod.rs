//! Tabular export of evaluated batches

pub mod csv;

pub use csv::{format_batch, format_rows, write_batch_file};
