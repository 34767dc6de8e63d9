//! # Edutask Config
//!
//! Configuration management for the Edutask backend.
//! Supports layered configuration from files and environment variables,
//! fail-fast validation, and runtime refresh.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
