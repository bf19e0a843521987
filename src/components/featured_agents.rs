//! Featured Agents Strip
//!
//! The home-page agent cards with a link to the full directory.

use leptos::prelude::*;

use crate::agents::AGENTS;

#[component]
pub fn FeaturedAgents() -> impl IntoView {
    let featured = &AGENTS[..4.min(AGENTS.len())];

    view! {
        <section class="featured-agents">
            <div class="section-header">
                <div>
                    <h2>"Meet Our Top Agents"</h2>
                    <p>"Dedicated experts to guide you through your property journey."</p>
                </div>
                <a href="/allAgents" class="see-all">"See All Agents ›"</a>
            </div>

            <div class="agent-grid">
                {featured
                    .iter()
                    .map(|agent| {
                        view! {
                            <div class="agent-card">
                                <img src=agent.image alt=agent.name class="agent-photo" />
                                <h3>{agent.name}</h3>
                                <p class="agent-summary">
                                    {format!(
                                        "{} Properties For Sale | Since {}",
                                        agent.properties_for_sale, agent.operating_since
                                    )}
                                </p>
                                <a href="/agents" class="agent-link">"View Profile"</a>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
