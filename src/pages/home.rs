//! Landing screen after sign-in: greeting plus the newest products.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::alert::Alert;
use crate::components::shoe_card::ShoeGrid;
use crate::state::catalog::{ListingState, load_listing};
use crate::state::session::use_session;
use crate::util::listing::{CATALOG_PATH, SortDirection, SortField, ShoeQuery, ordering_param};

const FEATURED: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let listing = RwSignal::new(ListingState::default());

    Effect::new(move || {
        let newest = ShoeQuery::page(1).with_ordering(Some(ordering_param(SortField::Id, SortDirection::Desc)));
        load_listing(session, newest, listing);
    });

    let featured = Signal::derive(move || listing.with(|l| l.page.results.iter().take(FEATURED).cloned().collect::<Vec<_>>()));
    let error = Signal::derive(move || listing.with(|l| l.error.clone()));
    let name = move || session.user().map(|u| u.display_name()).unwrap_or_default();

    view! {
        <section class="hero">
            <p class="hero__eyebrow">{move || format!("Welcome back, {}", name())}</p>
            <h1 class="hero__title">"Just Do It"</h1>
            <p class="hero__lede">"Fresh drops, classic silhouettes, and everything in between."</p>
            <A href=CATALOG_PATH attr:class="btn btn--primary">"Shop All"</A>
        </section>
        <section class="listing">
            <h2>"New Arrivals"</h2>
            <Alert message=error/>
            <ShoeGrid shoes=featured empty="No products yet."/>
        </section>
    }
}
