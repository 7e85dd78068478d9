//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    admin::AdminPage,
    catalog::CatalogPage,
    home::HomePage,
    login::LoginPage,
    not_found::NotFoundPage,
    oauth_redirect::{AppleRedirectPage, GoogleRedirectPage},
    product::ProductPage,
    profile::ProfilePage,
    register::RegisterPage,
    search::SearchPage,
    shoe_form::{AddShoePage, EditShoePage},
};
use crate::state::session::provide_session_context;
use crate::state::storage::CredentialStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session handle. The server always renders the loading state;
/// the browser restores the persisted session once, after hydration.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = provide_session_context(CredentialStore::browser());
    Effect::new(move || session.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("google-redirect-handler") view=GoogleRedirectPage/>
                <Route path=StaticSegment("apple-redirect-handler") view=AppleRedirectPage/>
                <ParentRoute path=StaticSegment("") view=ProtectedRoute>
                    <Route path=StaticSegment("home") view=HomePage/>
                    <Route path=StaticSegment("shoeDetails") view=CatalogPage/>
                    <Route path=(StaticSegment("shoeDetails"), ParamSegment("id")) view=ProductPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("searchResults") view=SearchPage/>
                    <Route path=StaticSegment("allDataForAdmin") view=AdminPage/>
                    <Route path=StaticSegment("addShoe") view=AddShoePage/>
                    <Route path=(StaticSegment("editShoe"), ParamSegment("id")) view=EditShoePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
