//! Mobile Filter Drawer
//!
//! Bottom sheet with a section list on the left and the current
//! dimension's options on the right. Apply commits and closes.

use leptos::prelude::*;

use crate::search::{DimensionKey, FilterDimension, PendingFilters};

#[component]
pub fn MobileFilterDrawer(
    dimensions: Memo<Vec<FilterDimension>>,
    pending: ReadSignal<PendingFilters>,
    set_pending: WriteSignal<PendingFilters>,
    set_open: WriteSignal<bool>,
    on_apply: Callback<()>,
) -> impl IntoView {
    let (current_section, set_current_section) = signal(DimensionKey::Transaction);

    let section_options = Memo::new(move |_| {
        let section = current_section.get();
        dimensions
            .get()
            .into_iter()
            .find(|d| d.key == section)
            .map(|d| d.options)
            .unwrap_or_default()
    });

    view! {
        <div class="drawer-backdrop" on:click=move |_| set_open.set(false)></div>
        <div class="drawer filter-drawer">
            <div class="drawer-header">
                <h3>"Filter Properties"</h3>
                <button class="drawer-close" on:click=move |_| set_open.set(false)>"×"</button>
            </div>

            <div class="drawer-body">
                <div class="drawer-sections">
                    <For
                        each=move || dimensions.get()
                        key=|dim| dim.key
                        children=move |dim| {
                            let key = dim.key;
                            let active = move || current_section.get() == key;
                            view! {
                                <button
                                    class=move || {
                                        if active() { "drawer-section active" } else { "drawer-section" }
                                    }
                                    on:click=move |_| set_current_section.set(key)
                                >
                                    {key.label()}
                                </button>
                            }
                        }
                    />
                </div>
                <div class="drawer-options">
                    {move || {
                        let key = current_section.get();
                        section_options
                            .get()
                            .into_iter()
                            .map(|opt| {
                                let label = opt.label.clone();
                                let picked = {
                                    let opt = opt.clone();
                                    move || pending.with(|p| p.get(key) == Some(&opt))
                                };
                                let on_pick = {
                                    let opt = opt.clone();
                                    move |_| set_pending.update(|p| p.select(key, opt.clone()))
                                };
                                let picked_class = picked.clone();
                                view! {
                                    <div
                                        class=move || {
                                            if picked_class() {
                                                "drawer-option selected"
                                            } else {
                                                "drawer-option"
                                            }
                                        }
                                        on:click=on_pick
                                    >
                                        <span>{label}</span>
                                        {move || picked().then(|| view! { <span class="tick">"✓"</span> })}
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>

            <div class="drawer-footer">
                <button
                    class="drawer-clear"
                    on:click=move |_| set_pending.update(|p| p.clear_all())
                >
                    "Clear All"
                </button>
                <button
                    class="drawer-apply"
                    on:click=move |_| {
                        on_apply.run(());
                        set_open.set(false);
                    }
                >
                    {move || format!("Show Results ({})", pending.with(|p| p.len()))}
                </button>
            </div>
        </div>
    }
}
