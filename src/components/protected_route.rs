//! Route guard for every screen that needs a session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the guarded routes as their parent. While the session is still
//! being restored it shows a placeholder; once settled it either renders the
//! nested route or replaces history with the login screen.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::state::session::use_session;
use crate::util::auth::{GateDecision, gate_decision, install_unauth_redirect};

#[component]
pub fn ProtectedRoute() -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, use_navigate());

    let decision = Memo::new(move |_| gate_decision(&session.session()));

    view! {
        {move || match decision.get() {
            GateDecision::Pending => {
                view! {
                    <div class="gate">
                        <p>"Loading..."</p>
                    </div>
                }
                    .into_any()
            }
            GateDecision::Allow => {
                view! {
                    <Navbar/>
                    <main class="page">
                        <Outlet/>
                    </main>
                }
                    .into_any()
            }
            GateDecision::Redirect { .. } => {
                view! {
                    <div class="gate">
                        <p>"Redirecting to login..."</p>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

/// Renders `children` for staff users and a notice for everyone else.
#[component]
pub fn StaffOnly(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    view! {
        <Show
            when=move || session.is_admin()
            fallback=|| {
                view! {
                    <div class="alert alert--info" role="alert">
                        "This page is for staff only."
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
