//! Product catalog with price sorting and pagination.

use leptos::prelude::*;

use crate::components::alert::Alert;
use crate::components::pagination::Pagination;
use crate::components::shoe_card::ShoeGrid;
use crate::state::catalog::{ListingState, load_listing};
use crate::state::session::use_session;
use crate::util::listing::{CatalogSort, ShoeQuery};

#[component]
pub fn CatalogPage() -> impl IntoView {
    let session = use_session();
    let listing = RwSignal::new(ListingState::default());
    let page = RwSignal::new(1_u64);
    let sort = RwSignal::new(CatalogSort::Default);

    Effect::new(move || {
        let query = ShoeQuery::page(page.get()).with_ordering(sort.get().ordering());
        load_listing(session, query, listing);
    });

    let on_sort = move |ev: leptos::ev::Event| {
        sort.set(CatalogSort::from_option_value(&event_target_value(&ev)));
        page.set(1);
    };

    let shoes = Signal::derive(move || listing.with(|l| l.page.results.clone()));
    let count = Signal::derive(move || listing.with(|l| l.page.count));
    let error = Signal::derive(move || listing.with(|l| l.error.clone()));

    view! {
        <section class="listing">
            <header class="listing__header">
                <h1>{move || format!("All Shoes ({})", count.get())}</h1>
                <label class="listing__sort">
                    <span>"Sort by"</span>
                    <select prop:value=move || sort.get().option_value() on:change=on_sort>
                        {CatalogSort::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.option_value()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
            </header>
            <Alert message=error/>
            <Show when=move || !listing.with(|l| l.loading) fallback=|| view! { <p class="listing__loading">"Loading..."</p> }>
                <ShoeGrid shoes=shoes empty="No shoes found."/>
            </Show>
            <Pagination current=page count=count on_change=Callback::new(move |p| page.set(p))/>
        </section>
    }
}
