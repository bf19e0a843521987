//! URL Query Synchronization
//!
//! Round-trips the applied filter state through `/search?<query>` so a
//! shared link reproduces the filtered view. Only the property-type id
//! and the free-text search term are committed to the URL; the other
//! dimensions stay client-side pending state.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::PendingFilters;

/// Characters escaped inside a query value.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'&')
    .add(b'%')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'=')
    .add(b'?');

/// The committed subset of the filter state, plus free text. This is
/// what the fetch layer consumes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppliedQuery {
    pub property_type_id: Option<i64>,
    pub search: Option<String>,
}

impl AppliedQuery {
    /// Promote the pending selection (and search text) to an applied
    /// query. The single pending -> applied transition point.
    pub fn from_pending(pending: &PendingFilters, search: &str) -> Self {
        let search = search.trim();
        Self {
            property_type_id: pending.property_type_id(),
            search: (!search.is_empty()).then(|| search.to_string()),
        }
    }

    /// Rebuild from URL query parameters.
    pub fn from_parts(property_type_id: Option<String>, search: Option<String>) -> Self {
        Self {
            property_type_id: property_type_id.and_then(|v| v.parse().ok()),
            search: search.filter(|s| !s.is_empty()),
        }
    }

    /// Query string without the leading `?`. Absent parameters are
    /// omitted entirely.
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        if let Some(id) = self.property_type_id {
            parts.push(format!("propertyStockItemId={}", id));
        }
        if let Some(search) = &self.search {
            parts.push(format!(
                "search={}",
                utf8_percent_encode(search, QUERY_VALUE)
            ));
        }
        parts.join("&")
    }

    /// Target for `use_navigate`.
    pub fn to_search_url(&self) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            "/search".to_string()
        } else {
            format!("/search?{}", query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{DimensionKey, FilterOption};

    #[test]
    fn test_query_string_omits_absent_params() {
        assert_eq!(AppliedQuery::default().to_query_string(), "");
        assert_eq!(AppliedQuery::default().to_search_url(), "/search");
    }

    #[test]
    fn test_query_string_carries_property_type_id() {
        let query = AppliedQuery {
            property_type_id: Some(7),
            search: None,
        };
        assert_eq!(query.to_search_url(), "/search?propertyStockItemId=7");
    }

    #[test]
    fn test_search_text_is_percent_encoded() {
        let query = AppliedQuery {
            property_type_id: None,
            search: Some("2 bhk & garden".to_string()),
        };
        assert_eq!(
            query.to_query_string(),
            "search=2%20bhk%20%26%20garden"
        );
    }

    #[test]
    fn test_from_pending_resets_nothing_else() {
        let mut pending = PendingFilters::default();
        pending.select(DimensionKey::City, FilterOption::text("Mumbai"));
        pending.select(
            DimensionKey::PropertyType,
            FilterOption::with_id(7, "Villa"),
        );
        let applied = AppliedQuery::from_pending(&pending, "  lake view ");
        assert_eq!(applied.property_type_id, Some(7));
        assert_eq!(applied.search.as_deref(), Some("lake view"));
        // City selection is pending-only; it never reaches the query
        assert_eq!(
            applied.to_query_string(),
            "propertyStockItemId=7&search=lake%20view"
        );
    }

    #[test]
    fn test_from_parts_ignores_malformed_id() {
        let applied = AppliedQuery::from_parts(Some("villa".to_string()), None);
        assert_eq!(applied.property_type_id, None);

        let applied = AppliedQuery::from_parts(Some("7".to_string()), Some(String::new()));
        assert_eq!(applied.property_type_id, Some(7));
        assert!(applied.search.is_none());
    }
}
