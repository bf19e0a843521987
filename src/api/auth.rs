//! Auth Endpoints

use serde::Deserialize;

use super::{client, with_timeout, ApiError};
use crate::config::BASE_URL;
use crate::models::{LoginRequest, LoginResponse};

#[derive(Debug, Clone, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Authenticate against the backend. A non-success status surfaces
/// the server's message as `ApiError::Rejected`.
pub async fn login(usercode: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let url = format!("{}/login", BASE_URL);
    let payload = LoginRequest {
        usercode: usercode.to_string(),
        password: password.to_string(),
    };

    let response =
        with_timeout(async move { client().post(&url).json(&payload).send().await }).await?;

    if response.status().is_success() {
        Ok(response.json::<LoginResponse>().await?)
    } else {
        let body: ErrorBody = response.json().await.unwrap_or_default();
        Err(ApiError::Rejected(body.message.unwrap_or_else(|| {
            "Invalid User Code or Password.".to_string()
        })))
    }
}
