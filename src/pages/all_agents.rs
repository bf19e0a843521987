//! Agent Directory Page
//!
//! Searchable, filterable grid over the static agent catalog.

use leptos::prelude::*;

use crate::agents::{distinct_values, filter_agents, AGENTS};
use crate::components::{Footer, Navbar};
use crate::models::Agent;

const ALL: &str = "All";

fn select_value(value: &str) -> Option<&str> {
    (value != ALL).then_some(value)
}

#[component]
fn AgentDirectoryCard(agent: &'static Agent) -> impl IntoView {
    view! {
        <div class="agent-card directory">
            <img src=agent.image alt=agent.name class="agent-photo" />
            <div class="agent-body">
                <h3>{agent.name}</h3>
                <p class="agent-summary">
                    {format!("Operating since {} · {} deals closed", agent.operating_since, agent.deals_closed)}
                </p>
                <p class="agent-counts">
                    {format!(
                        "{} for sale · {} for rent",
                        agent.properties_for_sale, agent.properties_for_rent
                    )}
                </p>
                <p class="agent-localities">
                    {format!("Operates in {}", agent.operates_in.join(", "))}
                </p>
                <a href="/agents" class="agent-link">"View Profile ›"</a>
            </div>
        </div>
    }
}

#[component]
pub fn AllAgentsPage() -> impl IntoView {
    let (term, set_term) = signal(String::new());
    let (city, set_city) = signal(ALL.to_string());
    let (state, set_state) = signal(ALL.to_string());

    let cities = distinct_values(|a| a.city);
    let states = distinct_values(|a| a.state);

    let filtered = Memo::new(move |_| {
        filter_agents(
            AGENTS,
            &term.get(),
            select_value(&city.get()),
            select_value(&state.get()),
        )
    });

    let options = |values: Vec<&'static str>| {
        values
            .into_iter()
            .map(|value| view! { <option value=value>{value}</option> })
            .collect_view()
    };

    view! {
        <div class="agents-page">
            <Navbar />

            <main class="agents-main">
                <h1>"Find Your Agent"</h1>

                <div class="agents-controls">
                    <input
                        type="text"
                        class="agents-search"
                        placeholder="Search by agency or locality..."
                        prop:value=move || term.get()
                        on:input=move |ev| set_term.set(event_target_value(&ev))
                    />
                    <select on:change=move |ev| set_city.set(event_target_value(&ev))>
                        <option value=ALL>"All Cities"</option>
                        {options(cities.clone())}
                    </select>
                    <select on:change=move |ev| set_state.set(event_target_value(&ev))>
                        <option value=ALL>"All States"</option>
                        {options(states.clone())}
                    </select>
                </div>

                {move || {
                    let agents = filtered.get();
                    if agents.is_empty() {
                        view! {
                            <div class="agents-empty">
                                "No agents match your search. Try different filters."
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="agent-grid">
                                {agents
                                    .into_iter()
                                    .map(|agent| view! { <AgentDirectoryCard agent=agent /> })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </main>

            <Footer />
        </div>
    }
}
