//! API utilities for frontend-backend communication
//!
//! The web app is served by the same host that answers `/api/*`,
//! so every URL is built from the page's own origin.

/// Get the base URL for API requests
///
/// # Returns
/// - Origin like "https://example.com" or "http://localhost:8000"
/// - Empty string if window is not available (the path is then used as a relative URL)
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(HISTORY_ENDPOINT);
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
