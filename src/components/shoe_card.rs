//! Product tile used by the catalog, search, and home screens.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Shoe;
use crate::util::listing::{format_price, media_url, product_path, truncate_words};

const CARD_DESCRIPTION_WORDS: usize = 12;

#[component]
pub fn ShoeCard(shoe: Shoe) -> impl IntoView {
    let href = product_path(shoe.id);
    let cover = media_url(shoe.shoe_cover_image.as_deref().or(shoe.shoe_main_image.as_deref()));
    let blurb = truncate_words(&shoe.shoe_inner_description, CARD_DESCRIPTION_WORDS);

    view! {
        <A href=href attr:class="shoe-card">
            <img class="shoe-card__image" src=cover alt=shoe.shoe_name.clone() loading="lazy"/>
            <div class="shoe-card__body">
                <h3 class="shoe-card__name">{shoe.shoe_name}</h3>
                <p class="shoe-card__kind">{shoe.shoe_description}</p>
                <p class="shoe-card__blurb">{blurb}</p>
                <p class="shoe-card__price">{format_price(&shoe.shoe_price)}</p>
            </div>
        </A>
    }
}

/// Grid of product tiles, or `empty` when there are none.
#[component]
pub fn ShoeGrid(#[prop(into)] shoes: Signal<Vec<Shoe>>, #[prop(into)] empty: String) -> impl IntoView {
    view! {
        <Show
            when=move || shoes.with(|s| !s.is_empty())
            fallback=move || view! { <p class="listing__empty">{empty.clone()}</p> }
        >
            <div class="shoe-grid">
                <For each=move || shoes.get() key=|shoe| shoe.id let:shoe>
                    <ShoeCard shoe/>
                </For>
            </div>
        </Show>
    }
}
