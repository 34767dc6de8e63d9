//! DAO (Data Access Object) layer.
//!
//! The [`Dao`] is a pass-through over a single collection. It talks to the
//! collection through the [`DocumentCollection`] capability so tests can
//! substitute a `mockall` double for MongoDB.
//!
//! Hierarchy:
//! ```text
//! Controller → Dao → DocumentCollection (trait) → MongoCollection → MongoDB
//! ```

pub mod collection;
pub mod document_dao;
pub mod r#impl;

pub use collection::DocumentCollection;
pub use document_dao::Dao;
pub use r#impl::MongoCollection;
