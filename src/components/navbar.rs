//! Navigation Bar
//!
//! Fixed top bar with logo, city selector, nav links, and the
//! login/logout affordance driven by the session provider.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::session::Session;
use crate::store::{store_set_session_user, use_app_store, AppStateStoreFields};

const CITIES: &[&str] = &["Bangalore", "Delhi", "Mumbai", "Chennai", "Pune", "Hyderabad"];

const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Properties", "/search"),
    ("Agents", "/allAgents"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let store = use_app_store();
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let (current_city, set_current_city) = signal("Mumbai".to_string());
    let (city_open, set_city_open) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    let username = Memo::new(move |_| {
        store
            .session_user()
            .get()
            .map(|user| user.display_name())
    });

    let on_logout = {
        let navigate = navigate.clone();
        move |_| {
            session.clear();
            store_set_session_user(&store, None);
            navigate("/", Default::default());
        }
    };
    let on_login = {
        let navigate = navigate.clone();
        move |_| navigate("/userLogin", Default::default())
    };

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <a href="/" class="navbar-logo">"RealEstate"</a>

                <div
                    class="city-selector"
                    on:mouseenter=move |_| set_city_open.set(true)
                    on:mouseleave=move |_| set_city_open.set(false)
                >
                    <span class="city-label">{move || current_city.get()}</span>
                    <span class="chevron">"▾"</span>
                    {move || city_open.get().then(|| view! {
                        <div class="dropdown-menu">
                            <div class="dropdown-heading">"Select City"</div>
                            {CITIES
                                .iter()
                                .map(|city| {
                                    let city = *city;
                                    let active = move || current_city.get() == city;
                                    view! {
                                        <div
                                            class=move || {
                                                if active() { "dropdown-option selected" } else { "dropdown-option" }
                                            }
                                            on:click=move |_| {
                                                set_current_city.set(city.to_string());
                                                set_city_open.set(false);
                                            }
                                        >
                                            {city}
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    })}
                </div>

                <div class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }>
                    {NAV_LINKS
                        .iter()
                        .map(|(label, href)| view! { <a href=*href class="nav-link">{*label}</a> })
                        .collect_view()}
                </div>

                <div class="nav-session">
                    {move || match username.get() {
                        Some(name) => view! {
                            <div class="nav-user">
                                <span class="nav-greeting">{format!("Hi, {}", name)}</span>
                                <button class="nav-logout" on:click=on_logout.clone()>"Logout"</button>
                            </div>
                        }
                        .into_any(),
                        None => view! {
                            <button class="nav-login" on:click=on_login.clone()>"Login"</button>
                        }
                        .into_any(),
                    }}
                </div>

                <button
                    class="nav-hamburger"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
            </div>
        </nav>
    }
}
