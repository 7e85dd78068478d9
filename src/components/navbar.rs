//! Top navigation for guarded screens and the public header.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guarded navbar owns the product search box and the logout action.
//! Logging out clears the session first, then leaves for the login screen
//! with history replacement so Back cannot return to a guarded page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session;
use crate::util::auth::{HOME_PATH, LOGIN_PATH, replace_options};
use crate::util::listing::{ADD_SHOE_PATH, ADMIN_PATH, CATALOG_PATH, search_path};

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let search = RwSignal::new(String::new());

    let navigate_search = navigate.clone();
    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let term = search.get_untracked();
        if term.trim().is_empty() {
            return;
        }
        navigate_search(&search_path(&term), NavigateOptions::default());
    };

    let on_logout = move |_| {
        session.logout();
        navigate(LOGIN_PATH, replace_options());
    };

    let greeting = move || session.user().map(|u| u.display_name()).unwrap_or_default();

    view! {
        <header class="navbar">
            <A href=HOME_PATH attr:class="navbar__brand">"Storefront"</A>
            <nav class="navbar__links">
                <A href=CATALOG_PATH>"Shop"</A>
                <Show when=move || session.is_admin()>
                    <A href=ADMIN_PATH>"Admin"</A>
                    <A href=ADD_SHOE_PATH>"Add Shoe"</A>
                </Show>
            </nav>
            <form class="navbar__search" role="search" on:submit=on_search>
                <input
                    type="search"
                    placeholder="Search"
                    aria-label="Search products"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </form>
            <div class="navbar__account">
                <A href="/profile" attr:class="navbar__profile">{greeting}</A>
                <button class="btn navbar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </header>
    }
}

/// Header for the login and registration screens.
#[component]
pub fn PublicNavbar() -> impl IntoView {
    view! {
        <header class="navbar navbar--public">
            <A href=LOGIN_PATH attr:class="navbar__brand">"Storefront"</A>
            <nav class="navbar__links">
                <A href=LOGIN_PATH>"Sign In"</A>
                <A href="/register">"Join Us"</A>
            </nav>
        </header>
    }
}
