//! Search Page
//!
//! Paginated, filterable listing view synchronized with the URL.
//! Editing filters never fetches; Apply commits the pending state to
//! the URL, and the fetch is a reactive consequence of the URL and the
//! page signal. Each fetch carries a sequence number so a late stale
//! response can never overwrite a newer one.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::api;
use crate::components::{
    FilterBar, Footer, MobileDetailsDrawer, MobileFilterDrawer, Navbar, PaginationBar,
    PropertyCard,
};
use crate::config::{COMPACT_PAGE_SIZE, LIST_PAGE_SIZE};
use crate::models::{PageResult, PropertySummary};
use crate::search::{
    catalog_dimensions, hydrate_property_type, AppliedQuery, DimensionKey, PendingFilters,
};
use crate::store::{store_set_property_types, use_app_store, AppStateStoreFields};

/// Listing fetch outcome. A failed fetch is not an empty result; the
/// two render differently.
#[derive(Clone, Debug, PartialEq)]
enum FetchState {
    Loading,
    Loaded(PageResult),
    Failed,
}

/// Compact viewports get the larger page size, one column of cards.
fn page_size_for_viewport() -> u32 {
    let compact = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|width| width < 768.0)
        .unwrap_or(false);
    if compact {
        COMPACT_PAGE_SIZE
    } else {
        LIST_PAGE_SIZE
    }
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let store = use_app_store();
    let navigate = use_navigate();
    let query_map = use_query_map();

    let (pending, set_pending) = signal(PendingFilters::default());
    let (search_text, set_search_text) = signal(String::new());
    let (current_page, set_current_page) = signal(1u32);
    let (state, set_state) = signal(FetchState::Loading);
    let (drawer_open, set_drawer_open) = signal(false);
    let (details_for, set_details_for) = signal(None::<PropertySummary>);
    let (fetch_seq, set_fetch_seq) = signal(0u64);

    // The applied query lives in the URL; this is the single parse point
    let applied = Memo::new(move |_| {
        let map = query_map.get();
        AppliedQuery::from_parts(map.get("propertyStockItemId"), map.get("search"))
    });

    let dimensions = Memo::new(move |_| catalog_dimensions(&store.property_types().get()));

    // Catalog load, once per page view; on failure the property-type
    // dimension simply renders with zero options
    Effect::new(move |_| {
        if !store.property_types().with(|types| types.is_empty()) {
            return;
        }
        spawn_local(async move {
            match api::fetch_property_types().await {
                Ok(types) => store_set_property_types(&store, types),
                Err(err) => web_sys::console::log_1(
                    &format!("Error fetching property types: {}", err).into(),
                ),
            }
        });
    });

    // Seed the pending selection from the URL once the catalog is in.
    // Unknown ids are a silent no-op.
    Effect::new(move |_| {
        let dims = dimensions.get();
        let query = applied.get();
        if let Some(text) = &query.search {
            set_search_text.set(text.clone());
        }
        if let Some(option) = query
            .property_type_id
            .and_then(|id| hydrate_property_type(&dims, id))
        {
            set_pending.update(|p| {
                // clear-then-select: plain select would toggle off
                p.clear(DimensionKey::PropertyType);
                p.select(DimensionKey::PropertyType, option);
            });
        }
    });

    // Page resets to 1 whenever the applied query changes
    Effect::new(move |prev: Option<AppliedQuery>| {
        let query = applied.get();
        if let Some(prev) = prev {
            if prev != query {
                set_current_page.set(1);
            }
        }
        query
    });

    let page_size = page_size_for_viewport();

    // The authoritative fetch. Only the newest sequence number may
    // write its result back.
    Effect::new(move |_| {
        let query = applied.get();
        let page = current_page.get();
        let seq = fetch_seq.get_untracked() + 1;
        set_fetch_seq.set(seq);
        set_state.set(FetchState::Loading);
        spawn_local(async move {
            let outcome =
                api::fetch_properties_page(&query, page.saturating_sub(1), page_size).await;
            if fetch_seq.get_untracked() != seq {
                // Superseded while in flight
                return;
            }
            match outcome {
                Ok(result) => set_state.set(FetchState::Loaded(result)),
                Err(err) => {
                    web_sys::console::log_1(
                        &format!("Error fetching properties: {}", err).into(),
                    );
                    set_state.set(FetchState::Failed);
                }
            }
        });
    });

    let total_pages = Memo::new(move |_| match state.get() {
        FetchState::Loaded(result) => result.total_pages,
        _ => 1,
    });

    // Apply: the single pending -> applied transition
    let on_apply = {
        let navigate = navigate.clone();
        Callback::new(move |_: ()| {
            let query = AppliedQuery::from_pending(
                &pending.get_untracked(),
                &search_text.get_untracked(),
            );
            set_current_page.set(1);
            navigate(&query.to_search_url(), Default::default());
        })
    };

    let open_details = Callback::new(move |property: PropertySummary| {
        set_details_for.set(Some(property));
    });
    let close_details = Callback::new(move |_: ()| set_details_for.set(None));

    view! {
        <div class="search-page">
            <Navbar />
            <FilterBar
                dimensions=dimensions
                pending=pending
                set_pending=set_pending
                search_text=search_text
                set_search_text=set_search_text
                set_drawer_open=set_drawer_open
                on_apply=on_apply
            />

            <main class="search-results">
                {move || match state.get() {
                    FetchState::Loading => view! {
                        <div class="results-loading"><div class="spinner"></div></div>
                    }
                    .into_any(),
                    FetchState::Failed => view! {
                        <div class="results-error">
                            <p>"Something went wrong while loading properties."</p>
                            <p>"Check your connection and try again."</p>
                        </div>
                    }
                    .into_any(),
                    FetchState::Loaded(result) if result.items.is_empty() => view! {
                        <div class="results-empty">
                            "No properties found. Try adjusting your search or filters."
                        </div>
                    }
                    .into_any(),
                    FetchState::Loaded(result) => view! {
                        <div class="results-list">
                            {result
                                .items
                                .iter()
                                .map(|property| {
                                    view! {
                                        <PropertyCard
                                            property=property.clone()
                                            on_open_details=open_details
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                }}
            </main>

            <PaginationBar
                current_page=current_page
                set_current_page=set_current_page
                total_pages=total_pages
            />

            {move || drawer_open.get().then(|| view! {
                <MobileFilterDrawer
                    dimensions=dimensions
                    pending=pending
                    set_pending=set_pending
                    set_open=set_drawer_open
                    on_apply=on_apply
                />
            })}

            {move || details_for.get().map(|property| view! {
                <MobileDetailsDrawer property=property on_close=close_details />
            })}

            <Footer />
        </div>
    }
}
