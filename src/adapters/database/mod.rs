//! Database abstractions and test doubles

pub mod memory;
pub mod traits;

pub use memory::{MemoryLedger, MemorySink};
pub use traits::{ProcessedLedger, RecordSink};
