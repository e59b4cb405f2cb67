//! Frontend Configuration
//!
//! The API base URL is baked in at compile time so the same bundle can be
//! pointed at a staging or production gateway without code changes.

use leptos::prelude::window;

/// Base URL for API requests, without a trailing slash.
///
/// Resolution order: the `WISHNEST_API_BASE` environment variable captured
/// at build time, then the page origin (same-origin deployments behind a
/// reverse proxy need no configuration at all).
pub fn api_base() -> String {
    if let Some(base) = option_env!("WISHNEST_API_BASE") {
        let base = base.trim().trim_end_matches('/');
        if !base.is_empty() {
            return base.to_string();
        }
    }
    page_origin()
}

/// Origin of the current page, used for building shareable links.
pub fn page_origin() -> String {
    window()
        .location()
        .origin()
        .unwrap_or_default()
        .trim_end_matches('/')
        .to_string()
}
