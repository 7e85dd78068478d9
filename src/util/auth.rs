//! Shared auth navigation helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route applies the same decision: wait while the session is
//! being restored, render when authenticated, otherwise replace the current
//! history entry with the login screen.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::query::QueryParams;
use crate::state::session::{Session, SessionContext};

/// Login screen (also the site root).
pub const LOGIN_PATH: &str = "/";
/// Landing screen after a successful login.
pub const HOME_PATH: &str = "/home";

/// Login screen entered right after creating an account.
pub const REGISTERED_LOGIN_PATH: &str = "/?registered=true";
const REGISTERED_NOTICE: &str = "Registration successful. Please sign in.";

/// Success notice the login screen shows for its query string.
pub fn login_notice_from_query(query: &str) -> Option<&'static str> {
    (QueryParams::parse(query).get("registered") == Some("true")).then_some(REGISTERED_NOTICE)
}

/// Outcome of evaluating the navigation gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session still restoring; show a placeholder.
    Pending,
    /// Render the guarded subtree.
    Allow,
    /// Leave for `to`, replacing history.
    Redirect { to: &'static str },
}

/// Decide what a guarded route shows for `session`.
pub fn gate_decision(session: &Session) -> GateDecision {
    if session.is_loading() {
        GateDecision::Pending
    } else if session.is_authenticated() {
        GateDecision::Allow
    } else {
        GateDecision::Redirect { to: LOGIN_PATH }
    }
}

/// History-replacing navigation, used for every auth-driven redirect.
pub fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect to login whenever the gate says so. Re-evaluated on every
/// session change.
pub fn install_unauth_redirect<F>(session: SessionContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GateDecision::Redirect { to } = gate_decision(&session.session()) {
            navigate(to, replace_options());
        }
    });
}
