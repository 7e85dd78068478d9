//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the calls, `error` classifies failures, and `types` defines
//! the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
