//! # Edutask Controller
//!
//! Entry points the application calls into. Controllers take caller input,
//! check what can be checked without the store, and hand the rest to a
//! [`Dao`](edutask_repository::Dao) or a
//! [`UserLookup`](edutask_repository::UserLookup).
//!
//! [`TodoController`] and [`UserController`] are Shaku components; the
//! server wires them into its module.

pub mod controller;
pub mod todo_controller;
pub mod user_controller;

pub use controller::Controller;
pub use todo_controller::{TodoController, TodoControllerInterface};
pub use user_controller::{UserController, UserControllerInterface};
