//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, alerts, pagers, product
//! cards) and the route guard, reading the session from context.

pub mod alert;
pub mod navbar;
pub mod pagination;
pub mod protected_route;
pub mod shoe_card;
