//! DAO collection implementations.
//!
//! The capability trait lives in the parent `dao/` module
//! (`collection.rs`); implementations are organized by technology.

pub mod mongo;

pub use mongo::MongoCollection;
