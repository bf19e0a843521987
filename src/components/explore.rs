//! Explore Section
//!
//! "Properties for everyone" category tiles and a small strip of
//! popular listings, linking into search.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

struct Category {
    title: &'static str,
    count: &'static str,
    image: &'static str,
}

const CATEGORIES: &[Category] = &[
    Category {
        title: "Owner Properties",
        count: "49,256",
        image: "/explore/owner.webp",
    },
    Category {
        title: "Projects",
        count: "",
        image: "/explore/projects.webp",
    },
    Category {
        title: "Budget Homes",
        count: "1,003",
        image: "/explore/budget.webp",
    },
];

struct PopularCard {
    bhk: &'static str,
    price: &'static str,
    location: &'static str,
    status: &'static str,
    image: &'static str,
}

const POPULAR: &[PopularCard] = &[
    PopularCard {
        bhk: "4 BHK Flat",
        price: "₹1.90 Cr",
        location: "Yelahanka, Bangalore",
        status: "Ready to Move",
        image: "/popular/yelahanka.webp",
    },
    PopularCard {
        bhk: "2 BHK Flat",
        price: "₹1.06 Cr",
        location: "Varthur, Bangalore",
        status: "Ready to Move",
        image: "/popular/varthur.webp",
    },
    PopularCard {
        bhk: "2 BHK Flat",
        price: "₹75 Lac",
        location: "Budigere Cross, Bangalore",
        status: "Ready to Move",
        image: "/popular/budigere.webp",
    },
    PopularCard {
        bhk: "1 BHK Flat",
        price: "₹64.9 Lac",
        location: "Chambenahalli, Bangalore",
        status: "Ready to Move",
        image: "/popular/chambenahalli.webp",
    },
];

#[component]
pub fn Explore() -> impl IntoView {
    let navigate = use_navigate();
    let to_search = move |_| navigate("/search", Default::default());

    view! {
        <section class="explore">
            <h2 class="section-title">"We've got properties for everyone"</h2>

            <div class="category-grid">
                {CATEGORIES
                    .iter()
                    .map(|category| {
                        view! {
                            <div class="category-tile">
                                <img src=category.image alt=category.title />
                                <div class="category-overlay">
                                    <h3>{category.title}</h3>
                                    {(!category.count.is_empty())
                                        .then(|| view! {
                                            <span class="category-count">{category.count}</span>
                                        })}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="popular-strip">
                {POPULAR
                    .iter()
                    .map(|card| {
                        view! {
                            <div class="popular-card" on:click=to_search.clone()>
                                <img src=card.image alt=card.bhk />
                                <div class="popular-body">
                                    <div class="popular-bhk">{card.bhk}</div>
                                    <div class="popular-price">{card.price}</div>
                                    <div class="popular-location">{card.location}</div>
                                    <div class="popular-status">{card.status}</div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
