//! Pagination Bar
//!
//! Page-number window plus First/Prev/Next/Last controls. Renders
//! nothing for a single page. Changing the page scrolls to the top;
//! the refetch is a reactive consequence of the page signal.

use leptos::prelude::*;

use crate::search::{is_first_page, is_last_page, page_window};

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[component]
pub fn PaginationBar(
    current_page: ReadSignal<u32>,
    set_current_page: WriteSignal<u32>,
    total_pages: Memo<u32>,
) -> impl IntoView {
    let paginate = move |page: u32| {
        set_current_page.set(page);
        scroll_to_top();
    };

    view! {
        {move || {
            let total = total_pages.get();
            (total > 1).then(|| {
                let current = current_page.get();
                let at_first = is_first_page(current);
                let at_last = is_last_page(current, total);
                view! {
                    <nav class="pagination">
                        <button
                            class="page-nav"
                            disabled=at_first
                            on:click=move |_| paginate(1)
                        >
                            "« First"
                        </button>
                        <button
                            class="page-nav"
                            disabled=at_first
                            on:click=move |_| paginate(current.saturating_sub(1).max(1))
                        >
                            "‹ Prev"
                        </button>
                        {page_window(current, total)
                            .into_iter()
                            .map(|page| {
                                let active = page == current;
                                view! {
                                    <button
                                        class=if active { "page-number active" } else { "page-number" }
                                        on:click=move |_| paginate(page)
                                    >
                                        {page}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <button
                            class="page-nav"
                            disabled=at_last
                            on:click=move |_| paginate((current + 1).min(total))
                        >
                            "Next ›"
                        </button>
                        <button
                            class="page-nav"
                            disabled=at_last
                            on:click=move |_| paginate(total)
                        >
                            "Last »"
                        </button>
                    </nav>
                }
            })
        }}
    }
}
