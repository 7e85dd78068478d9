//! Product detail: image gallery, description, and size picker.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::alert::Alert;
use crate::net::types::Shoe;
use crate::state::catalog::RecordState;
use crate::state::session::use_session;
use crate::util::listing::{format_price, media_url, parse_record_id};

const SIZES: [&str; 8] = ["UK 5", "UK 6", "UK 7", "UK 8", "UK 9", "UK 10", "UK 11", "UK 12"];

#[component]
pub fn ProductPage() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let record = RwSignal::new(RecordState::pending());

    Effect::new(move || {
        let Some(id) = parse_record_id(params.get().get("id").as_deref()) else {
            record.update(|r| r.invalid("Unknown product."));
            return;
        };
        record.update(|r| r.begin(id));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.token_untracked();
            let result = crate::net::api::fetch_shoe(token.as_deref(), id).await;
            if let Err(err) = &result {
                log::warn!("product {id} failed to load: {err}");
            }
            record.update(|r| {
                if !r.finish(id, result) {
                    log::debug!("discarded product {id} response after navigation");
                }
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, session);
    });

    let error = Signal::derive(move || record.with(|r| r.error.clone()));
    let shoe = Memo::new(move |_| record.with(|r| r.shoe.clone()));

    view! {
        <Alert message=error/>
        <Show
            when=move || !record.with(|r| r.loading)
            fallback=|| view! { <p class="listing__loading">"Loading..."</p> }
        >
            {move || shoe.get().map(|shoe: Shoe| view! { <ProductDetail shoe/> })}
        </Show>
    }
}

#[component]
fn ProductDetail(shoe: Shoe) -> impl IntoView {
    let mut images: Vec<String> = shoe.gallery().iter().map(|p| media_url(Some(p))).collect();
    if images.is_empty() {
        images.push(media_url(shoe.shoe_cover_image.as_deref()));
    }
    let selected = RwSignal::new(images.first().cloned().unwrap_or_default());
    let size = RwSignal::new(None::<&'static str>);
    let thumbs = images.clone();

    view! {
        <article class="product">
            <div class="product__gallery">
                <div class="product__thumbs">
                    {thumbs
                        .into_iter()
                        .map(|src| {
                            let value = src.clone();
                            view! {
                                <img
                                    class="product__thumb"
                                    class:product__thumb--active={
                                        let src = src.clone();
                                        move || selected.get() == src
                                    }
                                    src=src
                                    alt=""
                                    on:mouseenter=move |_| selected.set(value.clone())
                                />
                            }
                        })
                        .collect_view()}
                </div>
                <img class="product__main-image" src=move || selected.get() alt=shoe.shoe_name.clone()/>
            </div>
            <div class="product__info">
                <h1>{shoe.shoe_name.clone()}</h1>
                <p class="product__kind">{shoe.shoe_description.clone()}</p>
                <p class="product__price">{format_price(&shoe.shoe_price)}</p>
                <p class="product__tax">"incl. of taxes"</p>
                <h2>"Select Size"</h2>
                <div class="product__sizes">
                    {SIZES
                        .into_iter()
                        .map(|label| {
                            view! {
                                <button
                                    class="product__size"
                                    class:product__size--active=move || size.get() == Some(label)
                                    on:click=move |_| size.set(Some(label))
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="product__description">{shoe.shoe_inner_description.clone()}</p>
                <ul class="product__facts">
                    <li>{format!("Colour Shown: {}", shoe.shoe_color_name)}</li>
                    <li>{format!("Style: {}", shoe.shoe_style_name)}</li>
                    <li>{format!("Country/Region of Origin: {}", shoe.shoe_origin_country)}</li>
                </ul>
            </div>
        </article>
    }
}
