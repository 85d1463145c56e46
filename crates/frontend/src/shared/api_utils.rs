//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use super::config::use_config;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Get the base URL for API requests
///
/// Uses the configured origin, or the page origin when none is configured.
///
/// # Returns
/// - API base URL like "https://iaso.example.org"
/// - Empty string (relative URLs) if neither is available
pub fn api_base() -> String {
    let configured = use_config().api.base_url;
    if !configured.is_empty() {
        return configured;
    }
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/orgunits/12/");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Encodes query pairs, skipping empty values.
pub fn build_query<K, V>(pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let encoded: Vec<String> = pairs
        .iter()
        .filter(|(_, value)| !value.as_ref().is_empty())
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key.as_ref()),
                urlencoding::encode(value.as_ref())
            )
        })
        .collect();
    if encoded.is_empty() {
        String::new()
    } else {
        format!("?{}", encoded.join("&"))
    }
}

/// GET a JSON document from the API.
pub async fn fetch_json<T: DeserializeOwned>(path_and_query: &str) -> Result<T, String> {
    let url = api_url(path_and_query);
    let response = Request::get(&url)
        .header("Accept", "application/json")
        .header("Cache-Control", "no-cache")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        log::warn!("GET {} failed with status {}", url, response.status());
        return Err(format!("Server error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Invalid response: {}", e))
}

/// Numbers the requests of one page so that a response arriving after a
/// newer request was issued can be dropped.
#[derive(Clone, Default)]
pub struct RequestSequence(Arc<AtomicU64>);

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next sequence number.
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_latest(&self, seq: u64) -> bool {
        self.0.load(Ordering::SeqCst) == seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_sequence_drops_older() {
        let requests = RequestSequence::new();
        let first = requests.next();
        let second = requests.next();
        assert!(!requests.is_latest(first));
        assert!(requests.is_latest(second));

        let shared = requests.clone();
        let third = shared.next();
        assert!(!requests.is_latest(second));
        assert!(requests.is_latest(third));
    }

    #[test]
    fn test_build_query() {
        assert_eq!(
            build_query(&[("page", "2"), ("search", "Saint Luc"), ("order", "")]),
            "?page=2&search=Saint%20Luc"
        );
        assert_eq!(build_query::<&str, &str>(&[]), "");
    }
}
