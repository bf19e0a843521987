//! Property Details Page
//!
//! Showcase view for one residence: header image, price block, spec
//! grids, amenities, locality distances, and builder blurb with a
//! quick-navigation sidebar.

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::{Footer, Navbar};

#[derive(Clone, Copy, PartialEq)]
enum Section {
    About,
    Amenities,
    Locality,
    Builder,
}

const SECTIONS: &[(Section, &str)] = &[
    (Section::About, "About Property"),
    (Section::Amenities, "Amenities"),
    (Section::Locality, "Locality Details"),
    (Section::Builder, "Builder Info"),
];

const SPECS: &[(&str, &str)] = &[
    ("Transaction", "Resale"),
    ("Status", "Ready to Move"),
    ("Floor", "14 (Out of 16)"),
    ("Facing", "South-West"),
    ("Parking", "1 Open"),
    ("Lifts", "3"),
];

const AMENITIES: &[&str] = &[
    "Swimming Pool",
    "Gymnasium",
    "Parking",
    "Wi-Fi",
    "24/7 Security",
    "Clubhouse",
    "Children's Play Area",
    "Landscaped Gardens",
];

const LOCALITY: &[(&str, &str)] = &[
    ("Metro Station", "0.5 km"),
    ("School", "1.0 km"),
    ("Hospital", "3.1 km"),
    ("Shopping Mall", "2.5 km"),
    ("Highway Access", "2.0 km"),
];

#[component]
pub fn PropertyDetailsPage() -> impl IntoView {
    let (active, set_active) = signal(Section::About);

    let about_ref = NodeRef::<Div>::new();
    let amenities_ref = NodeRef::<Div>::new();
    let locality_ref = NodeRef::<Div>::new();
    let builder_ref = NodeRef::<Div>::new();

    let node_for = move |section: Section| match section {
        Section::About => about_ref,
        Section::Amenities => amenities_ref,
        Section::Locality => locality_ref,
        Section::Builder => builder_ref,
    };

    let jump_to = move |section: Section| {
        set_active.set(section);
        if let Some(el) = node_for(section).get_untracked() {
            el.scroll_into_view();
        }
    };

    view! {
        <div class="details-page">
            <Navbar />

            <header class="details-hero">
                <img src="/listings/aspen-park.webp" alt="Property Exterior" />
                <div class="details-hero-text">
                    <h1>"Aspen Park Residence"</h1>
                    <p>"A luxurious 1 BHK apartment in the prestigious Goregaon East, Mumbai."</p>
                </div>
            </header>

            <main class="details-layout">
                <div class="details-main">
                    <div class="details-price-card">
                        <div>
                            <div class="price-main">"₹1.35 Cr"</div>
                            <div class="price-rate">"Approx. EMI ₹47,000/month"</div>
                        </div>
                        <button class="contact-owner">"Contact Owner"</button>
                    </div>

                    <div class="feature-grid">
                        <div class="feature"><span class="feature-label">"Bedrooms"</span><span class="feature-value">"1"</span></div>
                        <div class="feature"><span class="feature-label">"Bathrooms"</span><span class="feature-value">"2"</span></div>
                        <div class="feature"><span class="feature-label">"Balconies"</span><span class="feature-value">"2"</span></div>
                        <div class="feature"><span class="feature-label">"Area"</span><span class="feature-value">"412 sqft"</span></div>
                    </div>

                    <div class="details-section" node_ref=about_ref>
                        <h2>"About this Property"</h2>
                        <p>
                            "This beautifully designed 1 BHK apartment in Aspen Park combines \
                             urban living with luxury. Fully furnished with high-quality \
                             interiors and fittings, it offers open views from two expansive \
                             balconies on the 14th floor."
                        </p>
                        <div class="spec-grid">
                            {SPECS
                                .iter()
                                .map(|(label, value)| {
                                    view! {
                                        <div class="spec-item">
                                            <span class="spec-label">{*label}</span>
                                            <span class="spec-value">{*value}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="details-section" node_ref=amenities_ref>
                        <h2>"Community Amenities"</h2>
                        <div class="amenity-grid">
                            {AMENITIES
                                .iter()
                                .map(|amenity| view! { <div class="amenity-tile">{*amenity}</div> })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="details-section" node_ref=locality_ref>
                        <h2>"Locality Details"</h2>
                        <div class="locality-grid">
                            {LOCALITY
                                .iter()
                                .map(|(label, distance)| {
                                    view! {
                                        <div class="locality-item">
                                            <span class="locality-label">{*label}</span>
                                            <span class="locality-distance">{*distance}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="details-section" node_ref=builder_ref>
                        <h2>"About the Builder"</h2>
                        <p>
                            "Developed by XYZ Developers, a distinguished name in Mumbai's \
                             real estate market with over 15 years of excellence, known for \
                             quality and timely delivery."
                        </p>
                    </div>
                </div>

                <aside class="details-sidebar">
                    <h3>"Quick Navigation"</h3>
                    {SECTIONS
                        .iter()
                        .map(|(section, label)| {
                            let section = *section;
                            view! {
                                <button
                                    class=move || {
                                        if active.get() == section {
                                            "sidebar-link active"
                                        } else {
                                            "sidebar-link"
                                        }
                                    }
                                    on:click=move |_| jump_to(section)
                                >
                                    {*label}
                                </button>
                            }
                        })
                        .collect_view()}
                </aside>
            </main>

            <Footer />
        </div>
    }
}
