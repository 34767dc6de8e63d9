//! Capability implementations backed by the DAO.

pub mod user_lookup_impl;
