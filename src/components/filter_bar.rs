//! Search Filter Bar
//!
//! Desktop dropdown row plus the Apply transition. Editing a dropdown
//! only touches the pending state; nothing is fetched until Apply
//! commits the selection to the URL.

use leptos::prelude::*;

use crate::search::{DimensionKey, FilterDimension, PendingFilters};

/// One filter dimension as a chip-with-dropdown.
#[component]
pub fn FilterDropdown(
    dimension: FilterDimension,
    pending: ReadSignal<PendingFilters>,
    set_pending: WriteSignal<PendingFilters>,
    open_key: ReadSignal<Option<DimensionKey>>,
    set_open_key: WriteSignal<Option<DimensionKey>>,
) -> impl IntoView {
    let key = dimension.key;
    let selected_label = move || pending.with(|p| p.get(key).map(|o| o.label.clone()));
    let is_open = move || open_key.get() == Some(key);

    let options = dimension.options.clone();
    let entries = move || {
        options
            .iter()
            .map(|option| {
                let opt = option.clone();
                let label = opt.label.clone();
                let picked = {
                    let opt = opt.clone();
                    move || pending.with(|p| p.get(key) == Some(&opt))
                };
                let on_pick = {
                    let opt = opt.clone();
                    move |_| {
                        set_pending.update(|p| p.select(key, opt.clone()));
                        set_open_key.set(None);
                    }
                };
                let picked_class = picked.clone();
                view! {
                    <div
                        class=move || {
                            if picked_class() { "dropdown-option selected" } else { "dropdown-option" }
                        }
                        on:click=on_pick
                    >
                        <span>{label}</span>
                        {move || picked().then(|| view! { <span class="tick">"✓"</span> })}
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="filter-dropdown" on:mouseenter=move |_| set_open_key.set(Some(key))>
            <button class=move || {
                if selected_label().is_some() { "filter-chip active" } else { "filter-chip" }
            }>
                <span>{move || selected_label().unwrap_or_else(|| key.label().to_string())}</span>
                {move || selected_label().map(|_| view! {
                    <span
                        class="chip-clear"
                        on:click=move |ev: web_sys::MouseEvent| {
                            ev.stop_propagation();
                            set_pending.update(|p| p.clear(key));
                            set_open_key.set(None);
                        }
                    >
                        "×"
                    </span>
                })}
                <span class="chevron">"▾"</span>
            </button>
            {move || is_open().then(|| view! { <div class="dropdown-menu">{entries()}</div> })}
        </div>
    }
}

/// Fixed bar under the navbar: search box, dimension dropdowns,
/// Clear All, and the mobile drawer trigger.
#[component]
pub fn FilterBar(
    dimensions: Memo<Vec<FilterDimension>>,
    pending: ReadSignal<PendingFilters>,
    set_pending: WriteSignal<PendingFilters>,
    search_text: ReadSignal<String>,
    set_search_text: WriteSignal<String>,
    set_drawer_open: WriteSignal<bool>,
    on_apply: Callback<()>,
) -> impl IntoView {
    let (open_key, set_open_key) = signal(None::<DimensionKey>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_apply.run(());
    };

    view! {
        <div class="filter-bar" on:mouseleave=move |_| set_open_key.set(None)>
            <div class="filter-bar-inner">
                <button
                    class="mobile-filter-trigger"
                    on:click=move |_| set_drawer_open.set(true)
                >
                    {move || format!("Filters ({})", pending.with(|p| p.len()))}
                </button>

                <form class="filter-search" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Search locality, project, landmark..."
                        prop:value=move || search_text.get()
                        on:input=move |ev| set_search_text.set(event_target_value(&ev))
                    />
                </form>

                <div class="filter-row">
                    // Key on the option count too: the catalog-backed
                    // dimension re-renders when its options arrive
                    <For
                        each=move || dimensions.get()
                        key=|dim| (dim.key, dim.options.len())
                        children=move |dim| {
                            view! {
                                <FilterDropdown
                                    dimension=dim
                                    pending=pending
                                    set_pending=set_pending
                                    open_key=open_key
                                    set_open_key=set_open_key
                                />
                            }
                        }
                    />
                    {move || (!pending.with(|p| p.is_empty())).then(|| view! {
                        <button
                            class="clear-all"
                            on:click=move |_| {
                                set_pending.update(|p| p.clear_all());
                                set_open_key.set(None);
                            }
                        >
                            "Clear All"
                        </button>
                    })}
                </div>

                <button class="apply-filters" on:click=move |_| on_apply.run(())>
                    "Apply"
                </button>
            </div>
        </div>
    }
}
