//! API utilities for talking to the pickup server
//!
//! Forms are served by the same server that answers the API, so every URL is
//! built against the page's own origin.

use contracts::domain::a001_pickup_request::fields;
use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use std::future::Future;
use wasm_bindgen::JsCast;

use crate::shared::api::ApiError;

/// Get the base URL for API requests
///
/// # Returns
/// - Origin like "https://pickups.example.com"
/// - Empty string if window is not available (relative URLs still work)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// Absolute URLs pass through unchanged, so endpoints configured on the page
/// may point elsewhere.
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/verify_zip?zipcode=94105");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Anti-forgery token the server embedded in the page.
///
/// Looks for a `csrf_token` input first, then a `csrf-token` meta tag.
pub fn csrf_token_from_page() -> Option<String> {
    let document = web_sys::window()?.document()?;

    let selector = format!("input[name=\"{}\"]", fields::CSRF_TOKEN);
    if let Ok(Some(el)) = document.query_selector(&selector) {
        if let Ok(input) = el.dyn_into::<web_sys::HtmlInputElement>() {
            let value = input.value();
            if !value.is_empty() {
                return Some(value);
            }
        }
    }

    let meta = document
        .query_selector("meta[name=\"csrf-token\"]")
        .ok()??
        .dyn_into::<web_sys::HtmlMetaElement>()
        .ok()?;
    let content = meta.content();
    (!content.is_empty()).then_some(content)
}

/// Race `request` against a timer; expiry counts as a transport failure
pub async fn with_timeout<T, F>(timeout_ms: u32, request: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    let request = Box::pin(request);
    let timer = Box::pin(TimeoutFuture::new(timeout_ms));
    match select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout(timeout_ms)),
    }
}
