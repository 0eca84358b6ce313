//! HTTP API Client
//!
//! Functions for communicating with the pole backend REST API.

use gloo_net::http::Request;

/// Default REST base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Default base the sign-in endpoint hangs off
pub const DEFAULT_AUTH_BASE: &str = "http://localhost:5000";

const API_URL_KEY: &str = "polewatch_api_url";
const AUTH_URL_KEY: &str = "polewatch_auth_url";

/// Join a base URL and a resource path, dropping one trailing slash from the base
pub fn join_url(base: &str, resource: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    format!("{}/{}", base, resource)
}

fn stored_url(key: &str, default: &str) -> String {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(key).ok().flatten())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// REST base URL from local storage, or the default
pub fn get_api_base() -> String {
    stored_url(API_URL_KEY, DEFAULT_API_BASE)
}

/// Sign-in base URL from local storage, or the default
pub fn get_auth_base() -> String {
    stored_url(AUTH_URL_KEY, DEFAULT_AUTH_BASE)
}

// ============ Response Types ============

/// Fleet-wide counters; absent or `null` fields read as 0
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Deserialize)]
pub struct Stats {
    #[serde(default, deserialize_with = "count_or_zero")]
    pub total: u64,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub active: u64,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub inactive: u64,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub alerts: u64,
}

fn count_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub role: String,
}

#[derive(Debug, serde::Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct SignInResponse {
    pub token: String,
    pub role: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub error: Option<String>,
}

/// Why a sign-in did not produce a session
#[derive(Debug, Clone, PartialEq)]
pub enum SignInError {
    /// Non-2xx JSON answer, with the body's `error` text when present
    Rejected(Option<String>),
    /// Network failure, or a body that is not the expected JSON
    Failed(String),
}

// ============ API Functions ============

/// Fetch fleet stats
pub async fn fetch_stats() -> Result<Stats, String> {
    let response = Request::get(&join_url(&get_api_base(), "stats"))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch stats: {}", response.status()));
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the signed-in user's profile with a bearer token
///
/// `Err(Some(status))` for non-2xx answers, `Err(None)` for transport or parse failures.
pub async fn fetch_user_info(token: &str) -> Result<UserInfo, Option<u16>> {
    let response = Request::get(&join_url(&get_api_base(), "auth/user-info"))
        .header("Authorization", &format!("Bearer {}", token))
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|_| None)?;

    if !response.ok() {
        return Err(Some(response.status()));
    }

    response.json().await.map_err(|_| None)
}

/// Exchange credentials for a token and role
pub async fn sign_in(email: &str, password: &str) -> Result<SignInResponse, SignInError> {
    let url = join_url(&get_auth_base(), "api/auth/signin");

    let response = Request::post(&url)
        .json(&Credentials { email, password })
        .map_err(|e| SignInError::Failed(e.to_string()))?
        .send()
        .await
        .map_err(|e| SignInError::Failed(format!("Network error: {}", e)))?;

    // A rejection whose body is not JSON counts as a failure, not a rejection.
    if !response.ok() {
        let error: ApiError = response.json().await
            .map_err(|e| SignInError::Failed(format!("Parse error: {}", e)))?;
        return Err(SignInError::Rejected(error.error));
    }

    response.json().await
        .map_err(|e| SignInError::Failed(format!("Parse error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_strips_one_trailing_slash() {
        assert_eq!(join_url("http://h/api", "stats"), "http://h/api/stats");
        assert_eq!(join_url("http://h/api/", "stats"), "http://h/api/stats");
        assert_eq!(join_url("http://h/api//", "stats"), "http://h/api//stats");
    }

    #[test]
    fn test_stats_missing_fields_default() {
        let stats: Stats = serde_json::from_str(r#"{"total": 4}"#).unwrap();
        assert_eq!(stats, Stats { total: 4, ..Stats::default() });
    }

    #[test]
    fn test_stats_null_fields_default() {
        let stats: Stats = serde_json::from_str(r#"{"total": 5, "active": null}"#).unwrap();
        assert_eq!(stats, Stats { total: 5, ..Stats::default() });
    }

    #[test]
    fn test_error_body_without_error_field() {
        let body: ApiError = serde_json::from_str("{}").unwrap();
        assert_eq!(body.error, None);
    }
}
