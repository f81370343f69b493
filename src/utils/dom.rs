//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Everything degrades to a
//! no-op (or `None`) when there is no window, so callers never panic.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlAnchorElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// `content` of `<meta name="{name}">`, if present.
pub fn meta_content(name: &str) -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", name);
    document()?
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}

/// Set the document title.
pub fn set_title(title: &str) {
    if let Some(document) = document() {
        document.set_title(title);
    }
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (without the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

/// Set the URL hash (adds to browser history).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}

/// Leave the app for another URL (e.g. the OAuth entry point).
pub fn set_location_href(url: &str) {
    if let Some(window) = window()
        && let Err(err) = window.location().set_href(url)
    {
        tracing::error!("failed to navigate to {}: {:?}", url, err);
    }
}

/// Open a URL in a new tab.
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

/// Save `url` under `file_name` through a temporary `<a download>`.
pub fn trigger_download(url: &str, file_name: &str) {
    let Some(document) = document() else {
        return;
    };
    let Ok(element) = document.create_element("a") else {
        return;
    };
    let anchor: HtmlAnchorElement = element.unchecked_into();
    anchor.set_href(url);
    anchor.set_download(file_name);
    anchor.click();
}
