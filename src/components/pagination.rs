//! Numbered pager shared by catalog, search, and admin listings.

use leptos::prelude::*;

use crate::util::listing::{page_count, visible_pages};

const PAGE_SPAN: u64 = 5;

/// Pager over `count` records; emits the chosen 1-based page.
#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<u64>,
    #[prop(into)] count: Signal<u64>,
    on_change: Callback<u64>,
) -> impl IntoView {
    let total = move || page_count(count.get());

    view! {
        <Show when=move || { total() > 1 }>
            <nav class="pager" aria-label="Pagination">
                <button
                    class="pager__step"
                    disabled=move || current.get() <= 1
                    on:click=move |_| on_change.run(current.get_untracked().saturating_sub(1).max(1))
                >
                    "‹ Prev"
                </button>
                {move || {
                    visible_pages(current.get(), total(), PAGE_SPAN)
                        .into_iter()
                        .map(|page| {
                            view! {
                                <button
                                    class="pager__page"
                                    class:pager__page--active=move || current.get() == page
                                    on:click=move |_| on_change.run(page)
                                >
                                    {page.to_string()}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pager__step"
                    disabled=move || current.get() >= total()
                    on:click=move |_| on_change.run((current.get_untracked() + 1).min(total()))
                >
                    "Next ›"
                </button>
            </nav>
        </Show>
    }
}
