//! Filter Catalog & Pending Selections
//!
//! Single-select toggle semantics per dimension. A missing entry means
//! "no filter applied" for that dimension; no sentinel values.

use std::collections::BTreeMap;

use crate::models::PropertyType;

/// Filter dimensions shown on the search page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DimensionKey {
    Transaction,
    City,
    Budget,
    PropertyType,
    Status,
}

impl DimensionKey {
    pub fn label(&self) -> &'static str {
        match self {
            DimensionKey::Transaction => "Transaction",
            DimensionKey::City => "City",
            DimensionKey::Budget => "Budget",
            DimensionKey::PropertyType => "Property Type",
            DimensionKey::Status => "Status",
        }
    }
}

/// One selectable option. Only `Property Type` options carry a backend
/// id; the static dimensions are plain labels.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOption {
    pub id: Option<i64>,
    pub label: String,
}

impl FilterOption {
    pub fn text(label: &str) -> Self {
        Self {
            id: None,
            label: label.to_string(),
        }
    }

    pub fn with_id(id: i64, label: &str) -> Self {
        Self {
            id: Some(id),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterDimension {
    pub key: DimensionKey,
    pub options: Vec<FilterOption>,
}

const TRANSACTIONS: &[&str] = &["Buy", "Rent", "Sell"];
const CITIES: &[&str] = &["Bangalore", "Delhi", "Mumbai"];
const BUDGETS: &[&str] = &["<50L", "50L-1Cr", "1Cr-2Cr", "2Cr+"];
const STATUSES: &[&str] = &["Ready to Move", "Under Construction"];

fn text_options(labels: &[&str]) -> Vec<FilterOption> {
    labels.iter().map(|l| FilterOption::text(l)).collect()
}

/// Full dimension catalog. `Property Type` options come from the
/// backend catalog; until it loads the dimension renders empty.
pub fn catalog_dimensions(property_types: &[PropertyType]) -> Vec<FilterDimension> {
    vec![
        FilterDimension {
            key: DimensionKey::Transaction,
            options: text_options(TRANSACTIONS),
        },
        FilterDimension {
            key: DimensionKey::City,
            options: text_options(CITIES),
        },
        FilterDimension {
            key: DimensionKey::Budget,
            options: text_options(BUDGETS),
        },
        FilterDimension {
            key: DimensionKey::PropertyType,
            options: property_types
                .iter()
                .map(|t| FilterOption::with_id(t.id, &t.item_name))
                .collect(),
        },
        FilterDimension {
            key: DimensionKey::Status,
            options: text_options(STATUSES),
        },
    ]
}

/// Look up a catalog option by backend id, for URL hydration. Unknown
/// ids yield `None` (silent no-op, not an error).
pub fn hydrate_property_type(
    dimensions: &[FilterDimension],
    id: i64,
) -> Option<FilterOption> {
    dimensions
        .iter()
        .find(|d| d.key == DimensionKey::PropertyType)?
        .options
        .iter()
        .find(|o| o.id == Some(id))
        .cloned()
}

/// The user's in-progress, unapplied selections. At most one option
/// per dimension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingFilters {
    selected: BTreeMap<DimensionKey, FilterOption>,
}

impl PendingFilters {
    /// Toggle: selecting the already-selected option clears it.
    pub fn select(&mut self, key: DimensionKey, option: FilterOption) {
        if self.selected.get(&key) == Some(&option) {
            self.selected.remove(&key);
        } else {
            self.selected.insert(key, option);
        }
    }

    /// Remove one dimension's selection.
    pub fn clear(&mut self, key: DimensionKey) {
        self.selected.remove(&key);
    }

    /// Reset the entire pending set.
    pub fn clear_all(&mut self) {
        self.selected.clear();
    }

    pub fn get(&self, key: DimensionKey) -> Option<&FilterOption> {
        self.selected.get(&key)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Backend id of the selected property type, if any.
    pub fn property_type_id(&self) -> Option<i64> {
        self.selected
            .get(&DimensionKey::PropertyType)
            .and_then(|o| o.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn villa() -> FilterOption {
        FilterOption::with_id(7, "Villa")
    }

    #[test]
    fn test_select_toggles_off_on_second_call() {
        let mut pending = PendingFilters::default();
        pending.select(DimensionKey::City, FilterOption::text("Mumbai"));
        assert_eq!(
            pending.get(DimensionKey::City).map(|o| o.label.as_str()),
            Some("Mumbai")
        );
        pending.select(DimensionKey::City, FilterOption::text("Mumbai"));
        assert!(pending.get(DimensionKey::City).is_none());
    }

    #[test]
    fn test_select_replaces_within_dimension() {
        let mut pending = PendingFilters::default();
        pending.select(DimensionKey::Budget, FilterOption::text("<50L"));
        pending.select(DimensionKey::Budget, FilterOption::text("2Cr+"));
        assert_eq!(pending.len(), 1);
        assert_eq!(
            pending.get(DimensionKey::Budget).map(|o| o.label.as_str()),
            Some("2Cr+")
        );
    }

    #[test]
    fn test_clear_all_is_a_true_reset() {
        let mut pending = PendingFilters::default();
        pending.select(DimensionKey::City, FilterOption::text("Delhi"));
        pending.select(DimensionKey::PropertyType, villa());
        pending.clear_all();

        let mut fresh = PendingFilters::default();
        pending.select(DimensionKey::Status, FilterOption::text("Ready to Move"));
        fresh.select(DimensionKey::Status, FilterOption::text("Ready to Move"));
        assert_eq!(pending, fresh);
    }

    #[test]
    fn test_clear_single_dimension_keeps_others() {
        let mut pending = PendingFilters::default();
        pending.select(DimensionKey::City, FilterOption::text("Delhi"));
        pending.select(DimensionKey::PropertyType, villa());
        pending.clear(DimensionKey::City);
        assert!(pending.get(DimensionKey::City).is_none());
        assert_eq!(pending.property_type_id(), Some(7));
    }

    #[test]
    fn test_hydrate_known_and_unknown_id() {
        let types = vec![PropertyType {
            id: 7,
            item_name: "Villa".to_string(),
        }];
        let dims = catalog_dimensions(&types);
        assert_eq!(
            hydrate_property_type(&dims, 7).map(|o| o.label),
            Some("Villa".to_string())
        );
        assert!(hydrate_property_type(&dims, 999).is_none());
    }

    #[test]
    fn test_property_type_dimension_empty_before_catalog_load() {
        let dims = catalog_dimensions(&[]);
        let property_type = dims
            .iter()
            .find(|d| d.key == DimensionKey::PropertyType)
            .unwrap();
        assert!(property_type.options.is_empty());
        // Static dimensions are available regardless
        assert!(dims.iter().any(|d| !d.options.is_empty()));
    }
}
