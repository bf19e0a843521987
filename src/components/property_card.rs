//! Listing Card
//!
//! One property summary as a result card. Desktop shows the inline
//! detail grid; mobile opens the bottom details drawer instead.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::models::PropertySummary;

/// Indian-market price label: crores above 1e7, lakhs above 1e5.
pub fn format_inr(amount: f64) -> String {
    if amount >= 10_000_000.0 {
        format!("₹{:.2} Cr", amount / 10_000_000.0)
    } else if amount >= 100_000.0 {
        format!("₹{:.2} Lac", amount / 100_000.0)
    } else {
        format!("₹{:.0}", amount)
    }
}

fn area_label(property: &PropertySummary) -> Option<String> {
    property.area.map(|a| {
        format!(
            "{:.0} {}",
            a,
            property.area_unit.as_deref().unwrap_or("sqft")
        )
    })
}

#[component]
pub fn PropertyCard(
    property: PropertySummary,
    on_open_details: Callback<PropertySummary>,
) -> impl IntoView {
    let navigate = use_navigate();
    let title = property.title();
    let cover = property.cover_url();
    let description = property.description.clone().unwrap_or_else(|| {
        "Close to many educational institutions and workspace. Spacious, airy and well-lit project.".to_string()
    });
    let price = property.total_amount.map(format_inr);
    let rate = property.basic_amount.map(format_inr);
    let area = area_label(&property);
    let floor = property.floor_number.map(|f| format!("Floor {}", f));
    let amenity_count = property.amenities.len();

    let for_drawer = property.clone();
    let open_drawer = move |_| on_open_details.run(for_drawer.clone());
    let view_details = move |_| navigate("/PropertyDetails", Default::default());

    view! {
        <article class="property-card">
            <div class="card-media">
                {match cover {
                    Some(url) => view! { <img src=url alt=title.clone() /> }.into_any(),
                    None => view! { <div class="card-media-placeholder"></div> }.into_any(),
                }}
            </div>
            <div class="card-body">
                <h2 class="card-title">{title}</h2>
                <p class="card-description">{description}</p>

                <div class="card-detail-grid">
                    {area.map(|a| view! { <span class="card-detail">"Area: " {a}</span> })}
                    {floor.map(|f| view! { <span class="card-detail">{f}</span> })}
                    {(amenity_count > 0)
                        .then(|| view! {
                            <span class="card-detail">{format!("{} amenities", amenity_count)}</span>
                        })}
                </div>

                <div class="card-footer">
                    <div class="card-price">
                        {price.map(|p| view! { <div class="price-main">{p}</div> })}
                        {rate.map(|r| view! { <div class="price-rate">{r} " base"</div> })}
                    </div>
                    <div class="card-actions">
                        <button class="card-action desktop-only" on:click=view_details>
                            "View Details"
                        </button>
                        <button class="card-action mobile-only" on:click=open_drawer>
                            "View Details"
                        </button>
                    </div>
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_inr_crores() {
        assert_eq!(format_inr(10_300_000.0), "₹1.03 Cr");
        assert_eq!(format_inr(19_800_000.0), "₹1.98 Cr");
    }

    #[test]
    fn test_format_inr_lakhs() {
        assert_eq!(format_inr(7_500_000.0), "₹75.00 Lac");
    }

    #[test]
    fn test_format_inr_small_amounts() {
        assert_eq!(format_inr(7_900.0), "₹7900");
    }

    #[test]
    fn test_area_label_defaults_unit() {
        let mut property: PropertySummary = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        property.area = Some(1306.0);
        assert_eq!(area_label(&property).as_deref(), Some("1306 sqft"));
        property.area_unit = Some("sqm".to_string());
        assert_eq!(area_label(&property).as_deref(), Some("1306 sqm"));
    }
}
