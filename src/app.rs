//! Application Shell
//!
//! Router, global state, and the route-change loader overlay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;
use reactive_stores::Store;

use crate::components::Loader;
use crate::config::ROUTE_LOADER_MS;
use crate::pages::{
    AgentProfilePage, AllAgentsPage, HomePage, LoginPage, PropertyDetailsPage, RegisterPage,
    SearchPage,
};
use crate::session::Session;
use crate::store::{store_set_session_user, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let session = Session::new();
    provide_context(session);

    // Rehydrate identity once per app start
    store_set_session_user(&store, session.load());

    view! {
        <Router>
            <AppWrapper />
        </Router>
    }
}

/// Routes plus the brief full-screen loader shown on navigation.
#[component]
fn AppWrapper() -> impl IntoView {
    let location = use_location();
    let (loading, set_loading) = signal(true);
    let (loader_seq, set_loader_seq) = signal(0u64);

    Effect::new(move |_| {
        let _path = location.pathname.get();
        let seq = loader_seq.get_untracked() + 1;
        set_loader_seq.set(seq);
        set_loading.set(true);
        spawn_local(async move {
            TimeoutFuture::new(ROUTE_LOADER_MS).await;
            // A later navigation owns the loader now
            if loader_seq.get_untracked() == seq {
                set_loading.set(false);
            }
        });
    });

    view! {
        {move || loading.get().then(|| view! { <Loader /> })}
        <Routes fallback=|| view! { <NotFound /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/search") view=SearchPage />
            <Route path=path!("/allAgents") view=AllAgentsPage />
            <Route path=path!("/PropertyDetails") view=PropertyDetailsPage />
            <Route path=path!("/agents") view=AgentProfilePage />
            <Route path=path!("/userLogin") view=LoginPage />
            <Route path=path!("/UserRegister") view=RegisterPage />
        </Routes>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to Home"</a>
        </div>
    }
}
