//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, form submission,
//! navigation) and delegates rendering details to `components`.

pub mod admin;
pub mod catalog;
pub mod home;
pub mod login;
pub mod not_found;
pub mod oauth_redirect;
pub mod product;
pub mod profile;
pub mod register;
pub mod search;
pub mod shoe_form;
