//! Search results for the navbar query (`/searchResults?q=`).

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::alert::Alert;
use crate::components::pagination::Pagination;
use crate::components::shoe_card::ShoeGrid;
use crate::state::catalog::{ListingState, load_listing};
use crate::state::session::use_session;
use crate::util::listing::{ShoeQuery, search_term_from_query};

#[component]
pub fn SearchPage() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let listing = RwSignal::new(ListingState::default());
    let page = RwSignal::new(1_u64);

    let term = Memo::new(move |_| search_term_from_query(&location.search.get()));

    // A new term starts from the first page.
    Effect::new(move || {
        term.track();
        if page.get_untracked() != 1 {
            page.set(1);
        }
    });

    Effect::new(move || {
        let query = ShoeQuery::page(page.get()).with_search(&term.get());
        load_listing(session, query, listing);
    });

    let shoes = Signal::derive(move || listing.with(|l| l.page.results.clone()));
    let count = Signal::derive(move || listing.with(|l| l.page.count));
    let error = Signal::derive(move || listing.with(|l| l.error.clone()));

    view! {
        <section class="listing">
            <header class="listing__header">
                <h1>
                    {move || {
                        let term = term.get();
                        if term.is_empty() {
                            "All Shoes".to_owned()
                        } else {
                            format!("Results for \"{term}\" ({})", count.get())
                        }
                    }}
                </h1>
            </header>
            <Alert message=error/>
            <Show when=move || !listing.with(|l| l.loading) fallback=|| view! { <p class="listing__loading">"Searching..."</p> }>
                <ShoeGrid shoes=shoes empty="Nothing matched your search."/>
            </Show>
            <Pagination current=page count=count on_change=Callback::new(move |p| page.set(p))/>
        </section>
    }
}
