//! UI Components
//!
//! Reusable Leptos components.

mod explore;
mod featured_agents;
mod filter_bar;
mod footer;
mod hero_search;
mod loader;
mod mobile_details_drawer;
mod mobile_filter_drawer;
mod navbar;
mod pagination_bar;
mod properties_by_city;
mod property_card;

pub use explore::Explore;
pub use featured_agents::FeaturedAgents;
pub use filter_bar::{FilterBar, FilterDropdown};
pub use footer::Footer;
pub use hero_search::HeroSearch;
pub use loader::Loader;
pub use mobile_details_drawer::MobileDetailsDrawer;
pub use mobile_filter_drawer::MobileFilterDrawer;
pub use navbar::Navbar;
pub use pagination_bar::PaginationBar;
pub use properties_by_city::PropertiesByCity;
pub use property_card::{format_inr, PropertyCard};
