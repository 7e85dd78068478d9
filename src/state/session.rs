//! Session state: who is logged in, and the context handle screens share.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one [`SessionContext`] at startup and provides it through
//! Leptos context. Every screen reads identity from it, and every REST call
//! reads the token from it immediately before sending.
//!
//! DESIGN
//! ======
//! [`Session`] is a plain value so the lifecycle rules (restore, login,
//! logout, consistency policy) are testable without a reactive runtime.
//! [`SessionContext`] only wraps it in a signal and owns the store.
//!
//! TRADE-OFFS
//! ==========
//! Server rendering cannot see `localStorage`, so the context starts in the
//! loading state and the client restores it after hydration. Guarded routes
//! render a placeholder until then instead of redirecting early.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::storage::CredentialStore;

/// Storage slot holding the raw token.
pub const TOKEN_KEY: &str = "userToken";
/// Storage slot holding the JSON profile.
pub const USER_KEY: &str = "user";

/// In-memory image of the current identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
    loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::pending()
    }
}

impl Session {
    /// Not yet restored from storage.
    #[must_use]
    pub fn pending() -> Self {
        Self { token: None, user: None, loading: true }
    }

    /// Restored and logged out.
    #[must_use]
    pub fn anonymous() -> Self {
        Self { token: None, user: None, loading: false }
    }

    /// Rebuild the session from its persisted image.
    ///
    /// A token without a readable profile (or a profile without a token) is
    /// treated as logged out and both slots are cleared.
    pub fn restore(store: &CredentialStore) -> Self {
        let token = store.read(TOKEN_KEY).filter(|t| !t.is_empty());
        let user = store.read_json::<User>(USER_KEY);
        match (token, user) {
            (Some(token), Some(user)) => Self { token: Some(token), user: Some(user), loading: false },
            (None, None) => Self::anonymous(),
            (token, _) => {
                log::warn!(
                    "persisted session incomplete (token present: {}); clearing",
                    token.is_some()
                );
                store.remove(TOKEN_KEY);
                store.remove(USER_KEY);
                Self::anonymous()
            }
        }
    }

    /// Set token and profile together and persist both.
    pub fn login(&mut self, store: &CredentialStore, token: String, user: User) {
        store.write(TOKEN_KEY, &token);
        store.write_json(USER_KEY, &user);
        self.token = Some(token);
        self.user = Some(user);
        self.loading = false;
    }

    /// Clear token and profile and remove both persisted slots.
    pub fn logout(&mut self, store: &CredentialStore) {
        self.token = None;
        self.user = None;
        self.loading = false;
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_staff)
    }

    /// The profile's username, which is the login email.
    pub fn user_email(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.username.as_deref())
    }
}

/// Copyable handle to the application's session, provided via context.
#[derive(Clone, Copy, Debug)]
pub struct SessionContext {
    state: RwSignal<Session>,
    store: StoredValue<CredentialStore>,
}

impl SessionContext {
    /// Create a handle in the loading state; call [`Self::restore`] on the client.
    pub fn new(store: CredentialStore) -> Self {
        Self { state: RwSignal::new(Session::pending()), store: StoredValue::new(store) }
    }

    /// Load the persisted session and leave the loading state.
    pub fn restore(&self) {
        let restored = self.store.with_value(Session::restore);
        log::debug!("session restored (authenticated: {})", restored.is_authenticated());
        self.state.set(restored);
    }

    pub fn login(&self, token: String, user: User) {
        let store = self.store.get_value();
        self.state.update(|s| s.login(&store, token, user));
        log::info!("session started");
    }

    pub fn logout(&self) {
        let store = self.store.get_value();
        self.state.update(|s| s.logout(&store));
        log::info!("session ended");
    }

    /// Current session, tracked.
    pub fn session(&self) -> Session {
        self.state.get()
    }

    /// Token for an outgoing request, read without subscribing.
    pub fn token_untracked(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token().map(str::to_owned))
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(Session::is_loading)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(Session::is_authenticated)
    }

    pub fn is_admin(&self) -> bool {
        self.state.with(Session::is_admin)
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user().cloned())
    }

    pub fn user_email(&self) -> Option<String> {
        self.state.with(|s| s.user_email().map(str::to_owned))
    }
}

/// Create the session handle and provide it to descendants.
pub fn provide_session_context(store: CredentialStore) -> SessionContext {
    let session = SessionContext::new(store);
    provide_context(session);
    session
}

/// Fetch the session handle provided by `App`.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
