//! Session Storage
//!
//! Token and role live in the browser's local storage under `token` / `role`.

const TOKEN_KEY: &str = "token";
const ROLE_KEY: &str = "role";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Stored session token; empty values count as absent
pub fn token() -> Option<String> {
    storage()?
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

/// Persist token and role after a successful sign-in
pub fn store_credentials(token: &str, role: &str) -> Result<(), String> {
    let storage = storage().ok_or_else(|| "Local storage unavailable".to_string())?;
    storage
        .set_item(TOKEN_KEY, token)
        .and_then(|_| storage.set_item(ROLE_KEY, role))
        .map_err(|_| "Failed to write session".to_string())
}

/// Forget the token; the role is left in place
pub fn clear_token() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
