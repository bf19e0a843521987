//! Properties by City Carousel
//!
//! Drag-to-scroll strip of city tiles, linking into search.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_dragscroll::{
    create_dragscroll_signals, make_on_mousedown, make_on_mousemove, make_on_release,
};

const DRAG_FACTOR: f64 = 2.0;

struct CityTile {
    city: &'static str,
    listings: &'static str,
    image: &'static str,
}

const CITY_TILES: &[CityTile] = &[
    CityTile {
        city: "Mumbai",
        listings: "32,400+ listings",
        image: "/cities/mumbai.webp",
    },
    CityTile {
        city: "Bangalore",
        listings: "28,900+ listings",
        image: "/cities/bangalore.webp",
    },
    CityTile {
        city: "Delhi",
        listings: "25,100+ listings",
        image: "/cities/delhi.webp",
    },
    CityTile {
        city: "Pune",
        listings: "18,700+ listings",
        image: "/cities/pune.webp",
    },
    CityTile {
        city: "Chennai",
        listings: "15,300+ listings",
        image: "/cities/chennai.webp",
    },
    CityTile {
        city: "Hyderabad",
        listings: "14,800+ listings",
        image: "/cities/hyderabad.webp",
    },
];

#[component]
pub fn PropertiesByCity() -> impl IntoView {
    let strip = NodeRef::<Div>::new();
    let drag = create_dragscroll_signals();

    let dragging = drag.dragging_read;

    view! {
        <section class="properties-by-city">
            <h2 class="section-title">"Explore Properties by City"</h2>
            <div
                class=move || {
                    if dragging.get() { "city-strip dragging" } else { "city-strip" }
                }
                node_ref=strip
                on:mousedown=make_on_mousedown(drag, strip)
                on:mousemove=make_on_mousemove(drag, strip, DRAG_FACTOR)
                on:mouseup=make_on_release(drag)
                on:mouseleave=make_on_release(drag)
            >
                {CITY_TILES
                    .iter()
                    .map(|tile| {
                        view! {
                            <a href="/search" class="city-tile" draggable="false">
                                <img src=tile.image alt=tile.city draggable="false" />
                                <div class="city-tile-body">
                                    <h3>{tile.city}</h3>
                                    <span>{tile.listings}</span>
                                </div>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
