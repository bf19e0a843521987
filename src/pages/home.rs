//! Home Page
//!
//! Hero slider with the search panel, followed by the marketing
//! sections.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{
    Explore, FeaturedAgents, Footer, HeroSearch, Navbar, PropertiesByCity,
};
use crate::config::HERO_SLIDE_MS;
use crate::store::{store_set_property_types, use_app_store, AppStateStoreFields};

const HERO_SLIDES: &[&str] = &[
    "/hero_bg_1.webp",
    "/hero_bg_2.webp",
    "/hero_bg_3.webp",
    "/hero_bg_4.webp",
];

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_app_store();
    let (slide, set_slide) = signal(0usize);

    // Rotate the hero background
    Effect::new(move |_| {
        Interval::new(HERO_SLIDE_MS, move || {
            set_slide.update(|i| *i = (*i + 1) % HERO_SLIDES.len());
        })
        .forget();
    });

    // The hero property-type dropdown needs the catalog
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

    view! {
        <div class="home-page">
            <Navbar />

            <section
                class="hero"
                style=move || format!("background-image: url({})", HERO_SLIDES[slide.get()])
            >
                <div class="hero-overlay"></div>
                <div class="hero-content">
                    <h1>"Find Your Dream Home with " <span class="brand">"RealEstate"</span></h1>
                    <h2>"Explore properties in your favorite localities across India"</h2>
                    <HeroSearch />
                </div>
            </section>

            <Explore />
            <FeaturedAgents />
            <PropertiesByCity />
            <Footer />
        </div>
    }
}
