//! Hero Search Bar
//!
//! The home-page search panel. Only the property-type dimension is
//! wired to the query; the other dropdowns are present in the UI but
//! not committed (the backend accepts no parameter for them).

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::search::AppliedQuery;
use crate::store::{use_app_store, AppStateStoreFields};

const HERO_CITIES: &[&str] = &["Mumbai", "Delhi", "Chennai", "Pune", "Hyderabad"];
const HERO_LOCALITIES: &[&str] = &["Andheri", "Koramangala", "T. Nagar", "Baner", "Banjara Hills"];
const HERO_BUDGETS: &[&str] = &["0 - 50L", "50L - 1Cr", "1Cr - 2Cr", "2Cr+"];
const HERO_BHK: &[&str] = &["1 BHK", "2 BHK", "3 BHK", "4+ BHK"];
const HERO_POSTED_BY: &[&str] = &["Owner", "Dealer", "Builder"];

/// One hero dropdown over plain labels, local selection only.
#[component]
fn HeroDropdown(label: &'static str, options: &'static [&'static str]) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (selected, set_selected) = signal(None::<&'static str>);

    view! {
        <div
            class="hero-dropdown"
            on:mouseenter=move |_| set_open.set(true)
            on:mouseleave=move |_| set_open.set(false)
        >
            <button class=move || {
                if selected.get().is_some() { "hero-chip active" } else { "hero-chip" }
            }>
                <span>{move || selected.get().unwrap_or(label)}</span>
                <span class="chevron">"▾"</span>
            </button>
            {move || open.get().then(|| view! {
                <div class="dropdown-menu">
                    {move || selected.get().map(|_| view! {
                        <div
                            class="dropdown-option clear"
                            on:click=move |_| {
                                set_selected.set(None);
                                set_open.set(false);
                            }
                        >
                            "Clear Selection"
                        </div>
                    })}
                    {options
                        .iter()
                        .map(|option| {
                            let option = *option;
                            view! {
                                <div
                                    class=move || {
                                        if selected.get() == Some(option) {
                                            "dropdown-option selected"
                                        } else {
                                            "dropdown-option"
                                        }
                                    }
                                    on:click=move |_| {
                                        set_selected.set(Some(option));
                                        set_open.set(false);
                                    }
                                >
                                    {option}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            })}
        </div>
    }
}

#[component]
pub fn HeroSearch() -> impl IntoView {
    let store = use_app_store();
    let navigate = use_navigate();

    let (type_open, set_type_open) = signal(false);
    let (selected_type, set_selected_type) = signal(None::<(i64, String)>);

    let on_search = move |_| {
        let query = AppliedQuery {
            property_type_id: selected_type.get().map(|(id, _)| id),
            search: None,
        };
        navigate(&query.to_search_url(), Default::default());
    };

    view! {
        <div class="hero-search">
            <HeroDropdown label="City" options=HERO_CITIES />
            <HeroDropdown label="Locality" options=HERO_LOCALITIES />
            <HeroDropdown label="Budget" options=HERO_BUDGETS />

            <div
                class="hero-dropdown"
                on:mouseenter=move |_| set_type_open.set(true)
                on:mouseleave=move |_| set_type_open.set(false)
            >
                <button class=move || {
                    if selected_type.get().is_some() { "hero-chip active" } else { "hero-chip" }
                }>
                    <span>
                        {move || {
                            selected_type
                                .get()
                                .map(|(_, name)| name)
                                .unwrap_or_else(|| "Property Type".to_string())
                        }}
                    </span>
                    <span class="chevron">"▾"</span>
                </button>
                {move || type_open.get().then(|| view! {
                    <div class="dropdown-menu">
                        {move || selected_type.get().map(|_| view! {
                            <div
                                class="dropdown-option clear"
                                on:click=move |_| {
                                    set_selected_type.set(None);
                                    set_type_open.set(false);
                                }
                            >
                                "Clear Selection"
                            </div>
                        })}
                        <For
                            each=move || store.property_types().get()
                            key=|t| t.id
                            children=move |property_type| {
                                let id = property_type.id;
                                let name = property_type.item_name.clone();
                                let pick_name = name.clone();
                                view! {
                                    <div
                                        class=move || {
                                            if selected_type.get().map(|(sid, _)| sid) == Some(id) {
                                                "dropdown-option selected"
                                            } else {
                                                "dropdown-option"
                                            }
                                        }
                                        on:click=move |_| {
                                            set_selected_type.set(Some((id, pick_name.clone())));
                                            set_type_open.set(false);
                                        }
                                    >
                                        {name}
                                    </div>
                                }
                            }
                        />
                    </div>
                })}
            </div>

            <HeroDropdown label="BHK" options=HERO_BHK />
            <HeroDropdown label="Posted By" options=HERO_POSTED_BY />

            <button class="hero-search-btn" on:click=on_search>"Search"</button>
        </div>
    }
}
