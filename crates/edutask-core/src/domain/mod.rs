//! Domain types stored by the backend.

pub mod todo;
pub mod user;

pub use todo::TodoItem;
pub use user::User;
