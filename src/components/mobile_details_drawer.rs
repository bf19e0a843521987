//! Mobile Details Drawer
//!
//! Bottom sheet showing one listing's summary on small screens.

use leptos::prelude::*;

use super::property_card::format_inr;
use crate::models::PropertySummary;

#[component]
pub fn MobileDetailsDrawer(
    property: PropertySummary,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = property.title();
    let price = property.total_amount.map(format_inr);
    let rate = property.basic_amount.map(format_inr);
    let area = property.area.map(|a| {
        format!(
            "{:.0} {}",
            a,
            property.area_unit.as_deref().unwrap_or("sqft")
        )
    });
    let floor = property.floor_number.map(|f| f.to_string());
    let description = property.description.clone();
    let amenities = property.amenities.clone();

    view! {
        <div class="drawer-backdrop" on:click=move |_| on_close.run(())></div>
        <div class="drawer details-drawer">
            <div class="drawer-handle"></div>
            <div class="drawer-header">
                <h3>{title}</h3>
                <button class="drawer-close" on:click=move |_| on_close.run(())>"×"</button>
            </div>

            <div class="drawer-price-block">
                {price.map(|p| view! { <div class="price-main">{p}</div> })}
                {rate.map(|r| view! { <div class="price-rate">{r} " base"</div> })}
            </div>

            <div class="drawer-spec-grid">
                {area.map(|a| view! { <div><strong>"Area: "</strong>{a}</div> })}
                {floor.map(|f| view! { <div><strong>"Floor: "</strong>{f}</div> })}
            </div>

            {description.map(|d| view! { <p class="drawer-description">{d}</p> })}

            {(!amenities.is_empty()).then(|| view! {
                <div class="drawer-amenities">
                    {amenities
                        .iter()
                        .map(|a| view! { <span class="amenity-chip">{a.clone()}</span> })
                        .collect_view()}
                </div>
            })}

            <div class="drawer-footer">
                <button class="drawer-apply">"Contact Builder"</button>
                <button class="drawer-clear">"Get Phone No."</button>
            </div>
        </div>
    }
}
