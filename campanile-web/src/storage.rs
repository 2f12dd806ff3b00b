//! Browser persistence for the session token and UI preferences.
//!
//! Everything lives in `localStorage` under fixed `campanile.*` keys so a
//! page reload can pick the session back up.

use gloo_storage::{LocalStorage, Storage};

/// Key the auth token is persisted under across page loads.
const AUTH_TOKEN_KEY: &str = "campanile.auth_token";

/// Key the theme choice is persisted under.
const THEME_KEY: &str = "campanile.theme";

/// Read the persisted auth token, if any.
pub fn load_token() -> Option<String> {
    LocalStorage::get(AUTH_TOKEN_KEY).ok()
}

/// Persist the auth token for future page loads.
pub fn store_token(token: &str) {
    if let Err(err) = LocalStorage::set(AUTH_TOKEN_KEY, token) {
        web_sys::console::error_1(&format!("Failed to persist auth token: {err}").into());
    }
}

/// Forget the persisted auth token.
pub fn clear_token() {
    LocalStorage::delete(AUTH_TOKEN_KEY);
}

/// Read the persisted theme choice, if any.
pub fn load_theme() -> Option<String> {
    LocalStorage::get(THEME_KEY).ok()
}

/// Persist the theme choice.
pub fn store_theme(theme: &str) {
    if let Err(err) = LocalStorage::set(THEME_KEY, theme) {
        web_sys::console::error_1(&format!("Failed to persist theme: {err}").into());
    }
}
