//! External integrations
//!
//! Adapters wrap the object store and the relational store behind domain
//! traits so the pipeline core stays free of SDK types.

pub mod database;
pub mod postgresql;
pub mod storage;
