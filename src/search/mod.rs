//! Listing Search & Filter Flow
//!
//! Pure state logic behind the search page: filter catalog and
//! pending selections, URL query synchronization, and the pagination
//! window. Components wire these into signals; everything here is
//! testable without a browser.

mod filters;
mod pagination;
mod query;

pub use filters::{
    catalog_dimensions, hydrate_property_type, DimensionKey, FilterDimension, FilterOption,
    PendingFilters,
};
pub use pagination::{is_first_page, is_last_page, page_window, PAGE_WINDOW};
pub use query::AppliedQuery;
