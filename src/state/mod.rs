//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `storage` is the leaf persistence seam and `session` owns the
//! authenticated identity on top of it. `oauth` drives the provider callback
//! screens; `catalog` tracks product listing requests.

pub mod catalog;
pub mod oauth;
pub mod session;
pub mod storage;
