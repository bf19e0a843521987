//! Agent Profile Page
//!
//! One agency in detail, with a drag-scrollable strip of its current
//! listings.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_dragscroll::{
    create_dragscroll_signals, make_on_mousedown, make_on_mousemove, make_on_release,
};

use crate::agents::{agent_by_id, AGENTS};
use crate::components::{Footer, Navbar};

const DRAG_FACTOR: f64 = 1.5;

struct ShowcaseListing {
    title: &'static str,
    price: &'static str,
    locality: &'static str,
    image: &'static str,
}

const SHOWCASE: &[ShowcaseListing] = &[
    ShowcaseListing {
        title: "3 BHK Flat, Bhavya Dazzle",
        price: "₹1.03 Cr",
        locality: "Sarjapur",
        image: "/listings/bhavya-dazzle.webp",
    },
    ShowcaseListing {
        title: "3 BHK Flat, Sri Nipuna Heritage",
        price: "₹1.10 Cr",
        locality: "Varthur",
        image: "/listings/sri-nipuna.webp",
    },
    ShowcaseListing {
        title: "2 BHK Flat, JP Nagar",
        price: "₹75 Lac",
        locality: "JP Nagar",
        image: "/listings/jp-nagar.webp",
    },
    ShowcaseListing {
        title: "2 BHK Flat, Gopalan Aqua",
        price: "₹1.98 Cr",
        locality: "Whitefield",
        image: "/listings/gopalan-aqua.webp",
    },
    ShowcaseListing {
        title: "1 BHK Flat, Aspen Park",
        price: "₹1.35 Cr",
        locality: "Goregaon East",
        image: "/listings/aspen-park.webp",
    },
];

#[component]
pub fn AgentProfilePage() -> impl IntoView {
    // The route carries no agent id; the profile shows the lead agency
    let agent = agent_by_id(1).unwrap_or(&AGENTS[0]);

    let strip = NodeRef::<Div>::new();
    let drag = create_dragscroll_signals();
    let dragging = drag.dragging_read;

    view! {
        <div class="agent-profile-page">
            <Navbar />

            <main class="agent-profile">
                <header class="profile-header">
                    <img src=agent.image alt=agent.name class="profile-photo" />
                    <div>
                        <h1>{agent.name}</h1>
                        <p class="profile-tagline">
                            {format!(
                                "Operating since {} · {} · {}",
                                agent.operating_since, agent.city, agent.state
                            )}
                        </p>
                    </div>
                </header>

                <div class="profile-stats">
                    <div class="stat">
                        <span class="stat-value">{agent.properties_for_sale}</span>
                        <span class="stat-label">"For Sale"</span>
                    </div>
                    <div class="stat">
                        <span class="stat-value">{agent.properties_for_rent}</span>
                        <span class="stat-label">"For Rent"</span>
                    </div>
                    <div class="stat">
                        <span class="stat-value">{agent.deals_closed}</span>
                        <span class="stat-label">"Deals Closed"</span>
                    </div>
                </div>

                <section class="profile-section">
                    <h2>"Deals In"</h2>
                    <div class="chip-row">
                        {agent
                            .deals_in
                            .iter()
                            .map(|deal| view! { <span class="chip">{*deal}</span> })
                            .collect_view()}
                    </div>
                </section>

                <section class="profile-section">
                    <h2>"Operates In"</h2>
                    <div class="chip-row">
                        {agent
                            .operates_in
                            .iter()
                            .map(|locality| view! { <span class="chip">{*locality}</span> })
                            .collect_view()}
                    </div>
                </section>

                <section class="profile-section">
                    <h2>"Current Listings"</h2>
                    <div
                        class=move || {
                            if dragging.get() { "listing-strip dragging" } else { "listing-strip" }
                        }
                        node_ref=strip
                        on:mousedown=make_on_mousedown(drag, strip)
                        on:mousemove=make_on_mousemove(drag, strip, DRAG_FACTOR)
                        on:mouseup=make_on_release(drag)
                        on:mouseleave=make_on_release(drag)
                    >
                        {SHOWCASE
                            .iter()
                            .map(|listing| {
                                view! {
                                    <div class="listing-tile">
                                        <img src=listing.image alt=listing.title draggable="false" />
                                        <div class="listing-body">
                                            <h3>{listing.title}</h3>
                                            <div class="listing-price">{listing.price}</div>
                                            <div class="listing-locality">{listing.locality}</div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </main>

            <Footer />
        </div>
    }
}
