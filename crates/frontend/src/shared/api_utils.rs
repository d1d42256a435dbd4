//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and attaching
//! credentials to requests.

use gloo_net::http::RequestBuilder;

/// Get the base URL for API requests
///
/// Taken from the `BACKEND_URI` environment variable at compile time.
/// When unset the frontend is served by the backend itself, so requests go
/// to the same origin and the base is the empty string.
///
/// # Example
/// ```ignore
/// let url = format!("{}/content/{}", api_base(), citation);
/// ```
pub fn api_base() -> &'static str {
    option_env!("BACKEND_URI")
        .map(|uri| uri.trim_end_matches('/'))
        .unwrap_or("")
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/")
///
/// # Example
/// ```ignore
/// let url = api_url("/feedback");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Attach `Authorization: Bearer <token>` when a token is available
///
/// Requests without a token are sent unchanged, which is what the backend
/// expects when authentication is not configured.
pub fn with_auth(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token.filter(|t| !t.is_empty()) {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_path() {
        assert_eq!(api_url("/feedback"), format!("{}/feedback", api_base()));
        assert!(!api_base().ends_with('/'));
    }
}
