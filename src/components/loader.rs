//! Full-screen Loader Overlay

use leptos::prelude::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader-overlay">
            <div class="ripple-loader">
                <div></div>
                <div></div>
            </div>
        </div>
    }
}
