//! Deployment Configuration
//!
//! Base URLs and tuning knobs for the backend REST API.

/// Auth endpoints (login)
pub const BASE_URL: &str = "https://api.realestate.example.com/api/v1";

/// Inventory endpoints (property stock, listings, media)
pub const BASE_URL2: &str = "https://inventory.realestate.example.com/api/v1";

/// Listings per page on the desktop search view
pub const LIST_PAGE_SIZE: u32 = 10;

/// Listings per page in compact views
pub const COMPACT_PAGE_SIZE: u32 = 20;

/// Abort a backend request after this long
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// Full-screen loader duration on route change
pub const ROUTE_LOADER_MS: u32 = 1_500;

/// Hero slide rotation interval
pub const HERO_SLIDE_MS: u32 = 3_000;

/// URL of a listing image, served by the media endpoint.
pub fn media_url(media_id: i64, property_id: i64) -> String {
    format!("{}/medias/{}/properties/{}", BASE_URL2, media_id, property_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_url_shape() {
        assert_eq!(
            media_url(3, 42),
            format!("{}/medias/3/properties/42", BASE_URL2)
        );
    }
}
