//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::util::auth::HOME_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="gate">
            <h1>"Page not found."</h1>
            <A href=HOME_PATH>"Back to the store"</A>
        </div>
    }
}
