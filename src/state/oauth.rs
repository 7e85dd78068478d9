//! Third-party login: authorize URLs and the callback handler state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend finishes the provider handshake and redirects the browser to
//! `/<provider>-redirect-handler?token=...&username=...`. The handler turns
//! those parameters into a session login, once per mount.
//!
//! DESIGN
//! ======
//! One handler serves every provider; only labels and paths differ. The
//! handler never navigates after a successful login: the next evaluation,
//! now authenticated on the callback path, sends the user home.

#[cfg(test)]
#[path = "oauth_test.rs"]
mod oauth_test;

use serde::Serialize;

use crate::net::types::User;
use crate::util::auth::{HOME_PATH, LOGIN_PATH};
use crate::util::query::QueryParams;

const GOOGLE_CLIENT_ID: &str = match option_env!("STOREFRONT_GOOGLE_CLIENT_ID") {
    Some(id) => id,
    None => "",
};

const APPLE_CLIENT_ID: &str = match option_env!("STOREFRONT_APPLE_CLIENT_ID") {
    Some(id) => id,
    None => "",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Apple,
}

#[derive(Serialize)]
struct GoogleAuthorizeParams<'a> {
    response_type: &'a str,
    client_id: &'a str,
    redirect_uri: &'a str,
    prompt: &'a str,
    access_type: &'a str,
    scope: &'a str,
}

#[derive(Serialize)]
struct AppleAuthorizeParams<'a> {
    response_type: &'a str,
    response_mode: &'a str,
    client_id: &'a str,
    redirect_uri: &'a str,
    scope: &'a str,
}

impl OAuthProvider {
    pub fn label(self) -> &'static str {
        match self {
            OAuthProvider::Google => "Google",
            OAuthProvider::Apple => "Apple",
        }
    }

    /// Storefront route the backend redirects to after the handshake.
    pub fn callback_path(self) -> &'static str {
        match self {
            OAuthProvider::Google => "/google-redirect-handler",
            OAuthProvider::Apple => "/apple-redirect-handler",
        }
    }

    /// Backend endpoint that receives the provider's authorization code.
    pub fn backend_redirect_uri(self, origin: &str) -> String {
        let slug = match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Apple => "apple",
        };
        format!("{}/auth/api/login/{slug}/", origin.trim_end_matches('/'))
    }

    fn client_id(self) -> &'static str {
        match self {
            OAuthProvider::Google => GOOGLE_CLIENT_ID,
            OAuthProvider::Apple => APPLE_CLIENT_ID,
        }
    }

    /// Provider authorize URL the login buttons send the browser to.
    pub fn authorize_url(self, origin: &str) -> String {
        self.authorize_url_with_client(origin, self.client_id())
    }

    fn authorize_url_with_client(self, origin: &str, client_id: &str) -> String {
        let redirect_uri = self.backend_redirect_uri(origin);
        let (base, query) = match self {
            OAuthProvider::Google => (
                "https://accounts.google.com/o/oauth2/v2/auth",
                serde_qs::to_string(&GoogleAuthorizeParams {
                    response_type: "code",
                    client_id,
                    redirect_uri: &redirect_uri,
                    prompt: "select_account",
                    access_type: "offline",
                    scope: "https://www.googleapis.com/auth/userinfo.email https://www.googleapis.com/auth/userinfo.profile",
                }),
            ),
            OAuthProvider::Apple => (
                "https://appleid.apple.com/auth/authorize",
                serde_qs::to_string(&AppleAuthorizeParams {
                    response_type: "code",
                    response_mode: "form_post",
                    client_id,
                    redirect_uri: &redirect_uri,
                    scope: "name email",
                }),
            ),
        };
        match query {
            Ok(query) => format!("{base}?{query}"),
            Err(e) => {
                log::warn!("could not encode {} authorize params: {e}", self.label());
                base.to_owned()
            }
        }
    }

    /// Message shown on the login screen when the callback carries no token.
    pub fn missing_token_message(self) -> String {
        format!("{} login failed to provide a token", self.label())
    }
}

/// Query parameters on a provider callback.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallbackParams {
    pub token: Option<String>,
    pub username: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub is_staff: Option<String>,
}

impl CallbackParams {
    /// Parse a callback query string. Repeated keys keep their first value
    /// and bad escapes decode lossily, so a present token is never lost.
    pub fn parse(query: &str) -> Self {
        let mut params = QueryParams::parse(query);
        Self {
            token: params.take("token"),
            username: params.take("username"),
            firstname: params.take("firstname"),
            lastname: params.take("lastname"),
            is_staff: params.take("is_staff"),
        }
    }

    /// Token, if present and non-empty.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// Profile built from the remaining parameters.
    pub fn profile(&self) -> User {
        User {
            username: self.username.clone(),
            firstname: self.firstname.clone(),
            lastname: self.lastname.clone(),
            is_staff: self.is_staff.as_deref() == Some("true"),
            ..User::default()
        }
    }
}

#[derive(Serialize)]
struct LoginErrorQuery<'a> {
    error: &'a str,
}

/// Login path carrying `message` as its `error` parameter.
pub fn login_error_path(message: &str) -> String {
    match serde_qs::to_string(&LoginErrorQuery { error: message }) {
        Ok(query) => format!("{LOGIN_PATH}?{query}"),
        Err(e) => {
            log::warn!("could not encode login error: {e}");
            LOGIN_PATH.to_owned()
        }
    }
}

/// The `error` parameter from a login-screen query string.
pub fn login_error_from_query(query: &str) -> Option<String> {
    QueryParams::parse(query).take("error").filter(|e| !e.is_empty())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CallbackPhase {
    #[default]
    Pending,
    Processed,
    TerminalRedirect,
}

/// What the mounted handler should do after one evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum CallbackAction {
    /// Nothing to do.
    Idle,
    /// Start a session.
    Login { token: String, user: User },
    /// Leave the callback route, replacing history.
    Navigate { to: String },
}

/// Per-mount callback handler for one provider.
#[derive(Clone, Debug)]
pub struct CallbackHandler {
    provider: OAuthProvider,
    phase: CallbackPhase,
}

impl CallbackHandler {
    pub fn new(provider: OAuthProvider) -> Self {
        Self { provider, phase: CallbackPhase::Pending }
    }

    pub fn provider(&self) -> OAuthProvider {
        self.provider
    }

    pub fn phase(&self) -> CallbackPhase {
        self.phase
    }

    /// Evaluate the handler against the current session and location.
    pub fn step(&mut self, authenticated: bool, path: &str, query: &str) -> CallbackAction {
        if self.phase == CallbackPhase::TerminalRedirect {
            return CallbackAction::Idle;
        }

        if authenticated || self.phase == CallbackPhase::Processed {
            if authenticated && path == self.provider.callback_path() {
                return CallbackAction::Navigate { to: HOME_PATH.to_owned() };
            }
            return CallbackAction::Idle;
        }

        let params = CallbackParams::parse(query);
        if let Some(token) = params.token() {
            self.phase = CallbackPhase::Processed;
            return CallbackAction::Login { token: token.to_owned(), user: params.profile() };
        }

        self.phase = CallbackPhase::TerminalRedirect;
        CallbackAction::Navigate { to: login_error_path(&self.provider.missing_token_message()) }
    }
}
