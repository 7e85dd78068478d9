//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers kept out of view code so they can be tested without a browser.

pub mod auth;
pub mod listing;
pub mod query;
