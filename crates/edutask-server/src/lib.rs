//! # Edutask Server Library
//!
//! Wiring and startup helpers for the `edutask-server` binary.

pub mod di;
pub mod startup;
