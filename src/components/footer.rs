//! Site Footer

use leptos::prelude::*;

const COMPANY_LINKS: &[(&str, &str)] = &[
    ("About Us", "#"),
    ("Careers", "#"),
    ("Contact Us", "#"),
    ("Terms & Conditions", "#"),
];

const EXPLORE_LINKS: &[(&str, &str)] = &[
    ("Properties in Bangalore", "/search"),
    ("Properties in Mumbai", "/search"),
    ("Properties in Delhi", "/search"),
    ("Find an Agent", "/allAgents"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let link_column = |title: &'static str, links: &'static [(&'static str, &'static str)]| {
        view! {
            <div class="footer-column">
                <h4>{title}</h4>
                <ul>
                    {links
                        .iter()
                        .map(|(label, href)| view! { <li><a href=*href>{*label}</a></li> })
                        .collect_view()}
                </ul>
            </div>
        }
    };

    view! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <div class="footer-logo">"RealEstate"</div>
                    <p>"Your trusted platform for property management and rental discovery."</p>
                </div>
                {link_column("Company", COMPANY_LINKS)}
                {link_column("Explore", EXPLORE_LINKS)}
                <div class="footer-column">
                    <h4>"Reach Us"</h4>
                    <ul>
                        <li>"support@realestate.example.com"</li>
                        <li>"+91 80 4000 1234"</li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">"© 2025 RealEstate. All rights reserved."</div>
        </footer>
    }
}
