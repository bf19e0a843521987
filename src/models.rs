//! Frontend Models
//!
//! Data structures matching backend payloads.

use serde::{Deserialize, Serialize};

/// Property type catalog entry (matches `/property-stock-unit-items`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyType {
    pub id: i64,
    #[serde(rename = "itemName")]
    pub item_name: String,
}

/// Reference to a listing image; the image itself is fetched by URL only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMedia {
    pub id: i64,
    #[serde(default)]
    pub media_type: Option<String>,
}

/// One listing entry as returned by the backend. Read-only on the
/// frontend; only displayed, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySummary {
    pub id: i64,
    #[serde(default)]
    pub property_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub basic_amount: Option<f64>,
    #[serde(default)]
    pub floor_number: Option<i32>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub area_unit: Option<String>,
    #[serde(default)]
    pub medias: Vec<PropertyMedia>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub facilities: Vec<String>,
}

impl PropertySummary {
    /// Display title, falling back to a generic label.
    pub fn title(&self) -> String {
        self.property_name
            .clone()
            .unwrap_or_else(|| format!("Property #{}", self.id))
    }

    /// First image URL, if the listing has any media.
    pub fn cover_url(&self) -> Option<String> {
        self.medias
            .first()
            .map(|m| crate::config::media_url(m.id, self.id))
    }
}

/// One page of listings after response normalization.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageResult {
    pub items: Vec<PropertySummary>,
    pub total_pages: u32,
}

/// Login request body for `POST /login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub usercode: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LoginUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub usercode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LoginOrganization {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LoginBranch {
    #[serde(default)]
    pub branch: Option<String>,
}

/// Successful login payload. Persisted wholesale by the session
/// provider so the navbar can greet the user after a reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: LoginUser,
    #[serde(default)]
    pub organization: LoginOrganization,
    #[serde(default)]
    pub branch: LoginBranch,
    #[serde(default)]
    pub privileges: Vec<String>,
    #[serde(default)]
    pub secret_key: Option<String>,
    #[serde(default)]
    pub current_day: Option<String>,
}

impl LoginResponse {
    /// Name shown in the navbar: organization first, then user.
    pub fn display_name(&self) -> String {
        self.organization
            .name
            .clone()
            .or_else(|| self.user.name.clone())
            .unwrap_or_else(|| "User".to_string())
    }
}

/// One agency in the static agent catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub id: u32,
    pub name: &'static str,
    pub operating_since: &'static str,
    pub properties_for_sale: u32,
    pub properties_for_rent: u32,
    pub deals_closed: u32,
    pub deals_in: &'static [&'static str],
    pub operates_in: &'static [&'static str],
    pub city: &'static str,
    pub state: &'static str,
    pub image: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_summary_tolerates_sparse_payload() {
        let parsed: PropertySummary = serde_json::from_str(r#"{"id": 9}"#).unwrap();
        assert_eq!(parsed.id, 9);
        assert!(parsed.medias.is_empty());
        assert_eq!(parsed.title(), "Property #9");
        assert!(parsed.cover_url().is_none());
    }

    #[test]
    fn test_property_summary_camel_case_fields() {
        let parsed: PropertySummary = serde_json::from_str(
            r#"{
                "id": 4,
                "propertyName": "Aspen Park",
                "totalAmount": 13500000.0,
                "basicAmount": 12000000.0,
                "floorNumber": 14,
                "area": 412.0,
                "areaUnit": "sqft",
                "medias": [{"id": 21, "mediaType": "image"}]
            }"#,
        )
        .unwrap();
        assert_eq!(parsed.title(), "Aspen Park");
        assert_eq!(parsed.floor_number, Some(14));
        assert_eq!(parsed.cover_url().unwrap(), crate::config::media_url(21, 4));
    }

    #[test]
    fn test_display_name_prefers_organization() {
        let parsed: LoginResponse = serde_json::from_str(
            r#"{"user": {"name": "Asha"}, "organization": {"name": "Estates Hub"}}"#,
        )
        .unwrap();
        assert_eq!(parsed.display_name(), "Estates Hub");

        let parsed: LoginResponse = serde_json::from_str(r#"{"user": {"name": "Asha"}}"#).unwrap();
        assert_eq!(parsed.display_name(), "Asha");

        let parsed: LoginResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.display_name(), "User");
    }
}
