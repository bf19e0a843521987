//! Agent Catalog
//!
//! Static agency directory and its filtering logic. The backend has no
//! agent endpoint; the catalog ships with the frontend.

use crate::models::Agent;

pub const AGENTS: &[Agent] = &[
    Agent {
        id: 1,
        name: "Estates Hub",
        operating_since: "2004",
        properties_for_sale: 12,
        properties_for_rent: 10,
        deals_closed: 1000,
        deals_in: &["Rent/Lease", "Pre-launch"],
        operates_in: &["Chembur", "Chembur East", "Union Park Chembur", "Swastik Park"],
        city: "Mumbai",
        state: "Maharashtra",
        image: "/agents/estates-hub.webp",
    },
    Agent {
        id: 2,
        name: "Urban Property",
        operating_since: "2010",
        properties_for_sale: 25,
        properties_for_rent: 30,
        deals_closed: 750,
        deals_in: &["Residential", "Commercial"],
        operates_in: &["Andheri", "Bandra", "Juhu"],
        city: "Mumbai",
        state: "Maharashtra",
        image: "/agents/urban-property.webp",
    },
    Agent {
        id: 3,
        name: "Golden Bricks",
        operating_since: "2008",
        properties_for_sale: 18,
        properties_for_rent: 15,
        deals_closed: 950,
        deals_in: &["Flats", "Villas", "Plots"],
        operates_in: &["Borivali", "Kandivali", "Dahisar"],
        city: "Mumbai",
        state: "Maharashtra",
        image: "/agents/golden-bricks.webp",
    },
    Agent {
        id: 4,
        name: "Prime Realty",
        operating_since: "2015",
        properties_for_sale: 50,
        properties_for_rent: 45,
        deals_closed: 500,
        deals_in: &["New Projects", "Resale"],
        operates_in: &["Thane", "Panvel", "Kalyan"],
        city: "Mumbai",
        state: "Maharashtra",
        image: "/agents/prime-realty.webp",
    },
    Agent {
        id: 5,
        name: "Delhi Dreams",
        operating_since: "2012",
        properties_for_sale: 40,
        properties_for_rent: 20,
        deals_closed: 600,
        deals_in: &["Apartments", "Builder Floors"],
        operates_in: &["Saket", "Vasant Kunj", "Dwarka"],
        city: "Delhi",
        state: "Delhi",
        image: "/agents/delhi-dreams.webp",
    },
    Agent {
        id: 6,
        name: "Pune Property Partners",
        operating_since: "2009",
        properties_for_sale: 30,
        properties_for_rent: 25,
        deals_closed: 850,
        deals_in: &["Resale", "New Projects", "Commercial"],
        operates_in: &["Wakad", "Hinjewadi", "Baner"],
        city: "Pune",
        state: "Maharashtra",
        image: "/agents/pune-property-partners.webp",
    },
];

/// Agency by id, for the profile page.
pub fn agent_by_id(id: u32) -> Option<&'static Agent> {
    AGENTS.iter().find(|a| a.id == id)
}

/// Distinct values of one attribute, in catalog order, for the
/// directory select boxes.
pub fn distinct_values(pick: fn(&Agent) -> &'static str) -> Vec<&'static str> {
    let mut values = Vec::new();
    for agent in AGENTS {
        let value = pick(agent);
        if !values.contains(&value) {
            values.push(value);
        }
    }
    values
}

/// Directory filter: free text matches the agency name or an operated
/// locality (case-insensitive); city/state must match exactly when set.
pub fn filter_agents<'a>(
    agents: &'a [Agent],
    term: &str,
    city: Option<&str>,
    state: Option<&str>,
) -> Vec<&'a Agent> {
    let term = term.trim().to_lowercase();
    agents
        .iter()
        .filter(|agent| {
            let matches_term = term.is_empty()
                || agent.name.to_lowercase().contains(&term)
                || agent
                    .operates_in
                    .iter()
                    .any(|locality| locality.to_lowercase().contains(&term));
            let matches_city = city.is_none_or(|c| agent.city == c);
            let matches_state = state.is_none_or(|s| agent.state == s);
            matches_term && matches_city && matches_state
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_by_name_case_insensitive() {
        let hits = filter_agents(AGENTS, "golden", None, None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Golden Bricks");
    }

    #[test]
    fn test_filter_by_locality() {
        let hits = filter_agents(AGENTS, "hinjewadi", None, None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Pune Property Partners");
    }

    #[test]
    fn test_filter_intersects_city_and_term() {
        // "Property" matches Urban Property and Pune Property Partners;
        // the city narrows it to one
        let hits = filter_agents(AGENTS, "property", Some("Pune"), None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Pune Property Partners");
    }

    #[test]
    fn test_empty_term_matches_all_in_state() {
        let hits = filter_agents(AGENTS, "", None, Some("Maharashtra"));
        assert_eq!(hits.len(), 5);
    }

    #[test]
    fn test_distinct_values_preserve_order() {
        assert_eq!(distinct_values(|a| a.city), vec!["Mumbai", "Delhi", "Pune"]);
        assert_eq!(
            distinct_values(|a| a.state),
            vec!["Maharashtra", "Delhi"]
        );
    }
}
