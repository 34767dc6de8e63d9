//! # Edutask Core
//!
//! Core types, traits, and error definitions for the Edutask backend.
//! Every other crate in the workspace builds on the error taxonomy,
//! typed identifiers, and domain types defined here.

pub mod document;
pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod traits;
pub mod validation;

pub use document::*;
pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use traits::*;
pub use validation::*;

// Re-export shaku so seam traits can declare `Interface` as a supertrait
pub use shaku::Interface;
