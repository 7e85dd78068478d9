//! Landing routes for the Google and Apple sign-in callbacks.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend completes the provider exchange and redirects here with the
//! session token and profile in the query string. A [`CallbackHandler`] per
//! mount decides whether to log in, go home, or bounce back to login with an
//! error.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::oauth::{CallbackAction, CallbackHandler, OAuthProvider};
use crate::state::session::use_session;
use crate::util::auth::replace_options;

#[component]
pub fn OAuthRedirect(provider: OAuthProvider) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let location = use_location();
    let handler = StoredValue::new(CallbackHandler::new(provider));

    Effect::new(move || {
        // Restoration has to settle first, or a stored session would look absent.
        if session.is_loading() {
            return;
        }
        let authenticated = session.is_authenticated();
        let path = location.pathname.get();
        let query = location.search.get();
        let action = handler
            .try_update_value(|h| h.step(authenticated, &path, &query))
            .unwrap_or(CallbackAction::Idle);
        match action {
            CallbackAction::Idle => {}
            CallbackAction::Login { token, user } => {
                log::info!("{} sign-in completed", provider.label());
                session.login(token, user);
            }
            CallbackAction::Navigate { to } => navigate(&to, replace_options()),
        }
    });

    view! {
        <div class="gate">
            <p>{format!("Signing you in with {}...", provider.label())}</p>
        </div>
    }
}

#[component]
pub fn GoogleRedirectPage() -> impl IntoView {
    view! { <OAuthRedirect provider=OAuthProvider::Google/> }
}

#[component]
pub fn AppleRedirectPage() -> impl IntoView {
    view! { <OAuthRedirect provider=OAuthProvider::Apple/> }
}
