//! Property Endpoints
//!
//! Catalog and paginated listing fetches.

use serde::Deserialize;

use super::{client, with_timeout, ApiError};
use crate::config::BASE_URL2;
use crate::models::{PageResult, PropertySummary, PropertyType};
use crate::search::AppliedQuery;

/// Raw page envelope. The backend has shipped both `content` and
/// `data` as the array key, and `totalPages` is sometimes absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope {
    #[serde(default)]
    content: Option<Vec<PropertySummary>>,
    #[serde(default)]
    data: Option<Vec<PropertySummary>>,
    #[serde(default)]
    total_pages: Option<u32>,
}

impl PageEnvelope {
    /// Collapse the tolerated shapes into one result. `totalPages`
    /// defaults to 1, never 0.
    pub fn normalize(self) -> PageResult {
        PageResult {
            items: self.content.or(self.data).unwrap_or_default(),
            total_pages: self.total_pages.unwrap_or(1).max(1),
        }
    }
}

/// Load the property-type catalog for the filter dimension.
pub async fn fetch_property_types() -> Result<Vec<PropertyType>, ApiError> {
    let url = format!("{}/property-stock-unit-items", BASE_URL2);
    with_timeout(async move {
        client()
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    })
    .await
}

/// Wire parameters for a listing request. The inclusion flags are
/// fixed; `page` is zero-based on the wire.
fn listing_params(query: &AppliedQuery, page: u32, page_size: u32) -> Vec<(&'static str, String)> {
    let mut params: Vec<(&'static str, String)> = vec![
        ("needMedia", "true".to_string()),
        ("needPLC", "true".to_string()),
        ("needFloors", "true".to_string()),
        ("isOnlyLinked", "true".to_string()),
        ("isOnlySerialized", "true".to_string()),
        ("isPaginated", "true".to_string()),
        ("page", page.to_string()),
        ("pageSize", page_size.to_string()),
    ];
    if let Some(id) = query.property_type_id {
        params.push(("propertyStockItemId", id.to_string()));
    }
    if let Some(search) = query.search.as_ref().filter(|s| !s.is_empty()) {
        params.push(("search", search.clone()));
    }
    params
}

/// Fetch one page of listings for the applied query.
pub async fn fetch_properties_page(
    query: &AppliedQuery,
    page: u32,
    page_size: u32,
) -> Result<PageResult, ApiError> {
    let url = format!("{}/properties", BASE_URL2);
    let params = listing_params(query, page, page_size);

    let envelope: PageEnvelope = with_timeout(async move {
        client()
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    })
    .await?;
    Ok(envelope.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_content_key() {
        let envelope: PageEnvelope =
            serde_json::from_str(r#"{"content": [{"id": 1}], "totalPages": 4}"#).unwrap();
        let page = envelope.normalize();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_pages, 4);
    }

    #[test]
    fn test_normalize_data_key() {
        let envelope: PageEnvelope =
            serde_json::from_str(r#"{"data": [{"id": 1}, {"id": 2}]}"#).unwrap();
        let page = envelope.normalize();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_normalize_empty_envelope() {
        let envelope: PageEnvelope = serde_json::from_str("{}").unwrap();
        let page = envelope.normalize();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_normalize_zero_total_pages_clamped() {
        let envelope: PageEnvelope =
            serde_json::from_str(r#"{"content": [], "totalPages": 0}"#).unwrap();
        assert_eq!(envelope.normalize().total_pages, 1);
    }

    #[test]
    fn test_listing_params_for_applied_filter() {
        let query = AppliedQuery {
            property_type_id: Some(7),
            search: None,
        };
        let params = listing_params(&query, 0, 10);
        assert!(params.contains(&("propertyStockItemId", "7".to_string())));
        assert!(params.contains(&("page", "0".to_string())));
        assert!(params.contains(&("pageSize", "10".to_string())));
        assert!(params.contains(&("needMedia", "true".to_string())));
        assert!(!params.iter().any(|(k, _)| *k == "search"));
    }

    #[test]
    fn test_listing_params_omit_unset_filter() {
        let params = listing_params(&AppliedQuery::default(), 3, 20);
        assert!(!params.iter().any(|(k, _)| *k == "propertyStockItemId"));
        assert!(params.contains(&("page", "3".to_string())));
        assert!(params.contains(&("pageSize", "20".to_string())));
    }
}
