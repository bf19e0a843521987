//! Session Provider
//!
//! Browser-storage-backed identity, provided via Leptos context.
//! Components never touch storage keys directly; they go through the
//! explicit load/store/clear operations here.

use crate::models::LoginResponse;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "userData";

/// Injected session capability. Copyable handle; all state lives in
/// browser localStorage.
#[derive(Clone, Copy, Default)]
pub struct Session;

impl Session {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    /// Current session, if a token and a parseable user record exist.
    pub fn load(&self) -> Option<LoginResponse> {
        let storage = Self::storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        let raw = storage.get_item(USER_KEY).ok().flatten()?;
        let mut user: LoginResponse = serde_json::from_str(&raw).ok()?;
        user.token = Some(token);
        Some(user)
    }

    /// Persist a successful login.
    pub fn store(&self, login: &LoginResponse) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Some(token) = &login.token {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
        if let Ok(raw) = serde_json::to_string(login) {
            let _ = storage.set_item(USER_KEY, &raw);
        }
    }

    /// Log out: drop everything this site persisted.
    pub fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.clear();
        }
    }
}
