//! # Edutask Repository
//!
//! Data access for the document store:
//!
//! ```text
//! Controller
//!   ↓  Arc<dyn UserLookup> / Dao
//! Dao                           (pass-through create / find / update / delete)
//!   ↓  Arc<dyn DocumentCollection>
//! MongoCollection               (MongoDB driver)
//!   ↓
//! MongoDB  (validators + unique indexes applied by SchemaBootstrap)
//! ```
//!
//! Constraint checking lives in the store. The DAO never validates a
//! document itself; it forwards the store's verdict unchanged.

pub mod client;
pub mod dao;
pub mod r#impl;
pub mod schema;
pub mod traits;

#[cfg(any(test, feature = "test-support"))]
pub mod mock;

pub use client::*;
pub use dao::{Dao, DocumentCollection, MongoCollection};
pub use r#impl::user_lookup_impl::UserDao;
pub use schema::*;
pub use traits::*;

/// Collection holding todo items.
pub const TODO_COLLECTION: &str = "todo";

/// Collection holding users.
pub const USER_COLLECTION: &str = "user";
