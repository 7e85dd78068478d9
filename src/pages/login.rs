//! Login page: email + password, plus Google and Apple sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the site root. OAuth failures land here as `/?error=...` and new
//! accounts as `/?registered=true`; the message is shown once and the query
//! is dropped from the URL.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::alert::{Alert, AlertKind, FieldError, field_message};
use crate::components::navbar::PublicNavbar;
use crate::forms::FieldErrors;
use crate::forms::login::LoginForm;
use crate::state::oauth::{OAuthProvider, login_error_from_query};
use crate::state::session::use_session;
use crate::util::auth::{HOME_PATH, LOGIN_PATH, login_notice_from_query, replace_options};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let location = use_location();

    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let message = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let navigate_clean = navigate.clone();
    Effect::new(move || {
        let query = location.search.get();
        let error = login_error_from_query(&query);
        let success = login_notice_from_query(&query);
        if error.is_none() && success.is_none() {
            return;
        }
        if let Some(error) = error {
            message.set(Some(error));
        }
        if let Some(success) = success {
            notice.set(Some(success.to_owned()));
        }
        navigate_clean(LOGIN_PATH, replace_options());
    });

    // Signed-in visitors skip the form once the session has settled.
    let settled = Memo::new(move |_| !session.is_loading());
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if settled.get() && untrack(move || session.is_authenticated()) {
            navigate_home(HOME_PATH, replace_options());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match form.get_untracked().validate() {
            Ok(request) => request,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());
        message.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&request).await {
                    Ok(resp) => {
                        session.login(resp.token, resp.user);
                        navigate(HOME_PATH, replace_options());
                    }
                    Err(err) => {
                        errors.set(crate::forms::server_field_errors(&err, &["username", "password"]));
                        message.set(Some(err.to_string()));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <PublicNavbar/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign In"</h1>
                <Alert message=message/>
                <Alert message=notice kind=AlertKind::Success/>
                <form class="auth-form" on:submit=on_submit novalidate>
                    <label class="field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            autocomplete="username"
                            prop:value=move || form.with(|f| f.username.clone())
                            on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                        />
                        <FieldError message=field_message(errors, "username")/>
                    </label>
                    <label class="field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                        <FieldError message=field_message(errors, "password")/>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <div class="auth-divider">"or"</div>
                <div class="auth-providers">
                    <button class="btn btn--provider" on:click=move |_| start_oauth(OAuthProvider::Google)>
                        "Continue with Google"
                    </button>
                    <button class="btn btn--provider" on:click=move |_| start_oauth(OAuthProvider::Apple)>
                        "Continue with Apple"
                    </button>
                </div>
                <p class="auth-card__switch">
                    "Not a member? "
                    <A href="/register">"Join Us"</A>
                </p>
            </div>
        </div>
    }
}

/// Send the browser to the provider's consent screen.
fn start_oauth(provider: OAuthProvider) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let origin = location.origin().unwrap_or_default();
        log::info!("starting {} sign-in", provider.label());
        if let Err(e) = location.set_href(&provider.authorize_url(&origin)) {
            log::warn!("could not open {} sign-in: {e:?}", provider.label());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = provider;
}
