//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{LoginResponse, PropertyType};

/// App-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Logged-in user, hydrated from the session provider on startup
    pub session_user: Option<LoginResponse>,
    /// Property-type catalog; empty until the backend responds
    pub property_types: Vec<PropertyType>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the property-type catalog after a catalog fetch
pub fn store_set_property_types(store: &AppStore, types: Vec<PropertyType>) {
    store.property_types().set(types);
}

/// Record a fresh login
pub fn store_set_session_user(store: &AppStore, user: Option<LoginResponse>) {
    store.session_user().set(user);
}
