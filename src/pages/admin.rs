//! Staff product console: sortable, searchable, paginated table with edit
//! and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The URL query is the source of truth for page, sort, and search. Every
//! control navigates to a new query; the listing reloads from the URL, so
//! reloads and Back restore the same view.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::alert::{Alert, AlertKind};
use crate::components::pagination::Pagination;
use crate::components::protected_route::StaffOnly;
use crate::state::catalog::{ListingState, load_listing};
use crate::state::session::use_session;
use crate::util::listing::{
    ADD_SHOE_PATH, ListingParams, SortDirection, SortField, edit_shoe_path, format_price, media_url, product_path,
    truncate_words,
};

const NAME_WORDS: usize = 4;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <StaffOnly>
            <AdminListing/>
        </StaffOnly>
    }
}

#[component]
fn AdminListing() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();
    let listing = RwSignal::new(ListingState::default());
    let notice = RwSignal::new(None::<String>);
    let search_input = RwSignal::new(String::new());

    let params = Memo::new(move |_| ListingParams::from_query(&location.search.get()));

    Effect::new(move || {
        let params = params.get();
        search_input.set(params.search.clone());
        load_listing(session, params.backend_query(), listing);
    });

    let target = RwSignal::new(None::<ListingParams>);
    Effect::new(move || {
        if let Some(next) = target.get() {
            target.set(None);
            navigate(&next.admin_path(), NavigateOptions::default());
        }
    });
    let go = move |next: ListingParams| target.set(Some(next));

    let on_field = move |ev: leptos::ev::Event| {
        let field = SortField::from_param(&event_target_value(&ev)).unwrap_or_default();
        go(params.get_untracked().with_field(field));
    };
    let on_direction = move |ev: leptos::ev::Event| {
        let direction = SortDirection::from_param(&event_target_value(&ev)).unwrap_or_default();
        go(params.get_untracked().with_direction(direction));
    };
    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        go(params.get_untracked().with_search(&search_input.get_untracked()));
    };

    let on_delete = move |id: u64, name: String| {
        if !confirm_delete(&name) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.token_untracked();
            match crate::net::api::delete_shoe(token.as_deref(), id).await {
                Ok(()) => {
                    log::info!("deleted product {id}");
                    listing.update(|l| l.remove(id));
                    notice.set(Some(format!("Deleted \"{name}\".")));
                    if listing.with_untracked(|l| l.page.results.is_empty()) {
                        let current = params.get_untracked();
                        let previous = current.page.saturating_sub(1);
                        go(current.with_page(previous));
                    }
                }
                Err(err) => listing.update(|l| l.error = Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, name);
    };

    let current_page = Signal::derive(move || params.with(|p| p.page));
    let count = Signal::derive(move || listing.with(|l| l.page.count));
    let error = Signal::derive(move || listing.with(|l| l.error.clone()));

    view! {
        <section class="admin">
            <header class="admin__header">
                <h1>{move || format!("Products ({})", count.get())}</h1>
                <A href=ADD_SHOE_PATH attr:class="btn btn--primary">"Add Shoe"</A>
            </header>
            <div class="admin__controls">
                <form class="admin__search" role="search" on:submit=on_search>
                    <input
                        type="search"
                        placeholder="Search products"
                        prop:value=move || search_input.get()
                        on:input=move |ev| search_input.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">"Search"</button>
                </form>
                <label>
                    <span>"Sort by"</span>
                    <select prop:value=move || params.with(|p| p.field.as_param()) on:change=on_field>
                        {SortField::ALL
                            .into_iter()
                            .map(|f| view! { <option value=f.as_param()>{f.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    <span>"Order"</span>
                    <select prop:value=move || params.with(|p| p.direction.as_param()) on:change=on_direction>
                        {[SortDirection::Asc, SortDirection::Desc]
                            .into_iter()
                            .map(|d| view! { <option value=d.as_param()>{d.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
            </div>
            <Alert message=notice kind=AlertKind::Success/>
            <Alert message=error/>
            <table class="admin__table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Image"</th>
                        <th>"Name"</th>
                        <th>"Price"</th>
                        <th>"Colour"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || listing.with(|l| l.page.results.clone()) key=|shoe| shoe.id let:shoe>
                        {
                            let id = shoe.id;
                            let name = shoe.shoe_name.clone();
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>
                                        <img
                                            class="admin__thumb"
                                            src=media_url(shoe.shoe_cover_image.as_deref())
                                            alt=""
                                        />
                                    </td>
                                    <td>
                                        <A href=product_path(id)>{truncate_words(&shoe.shoe_name, NAME_WORDS)}</A>
                                    </td>
                                    <td>{format_price(&shoe.shoe_price)}</td>
                                    <td>{shoe.shoe_color_name.clone()}</td>
                                    <td class="admin__actions">
                                        <A href=edit_shoe_path(id) attr:class="btn">"Edit"</A>
                                        <button
                                            class="btn btn--danger"
                                            on:click=move |_| on_delete(id, name.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    </For>
                </tbody>
            </table>
            <Show when=move || listing.with(|l| !l.loading && l.page.results.is_empty() && l.error.is_none())>
                <p class="listing__empty">"No products match."</p>
            </Show>
            <Pagination
                current=current_page
                count=count
                on_change=Callback::new(move |page| go(params.get_untracked().with_page(page)))
            />
        </section>
    }
}

fn confirm_delete(name: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(&format!("Delete \"{name}\"? This cannot be undone.")).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        false
    }
}
