//! Rule engine and batch evaluation

pub mod batch;
pub mod rules;

pub use batch::{evaluate_batch, evaluate_record};
