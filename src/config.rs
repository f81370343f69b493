//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The backend base URL can be overridden per deployment with a
//! `<meta name="genx-api-base" content="...">` tag in `index.html`.

use tracing::level_filters::LevelFilter;

use crate::core::decode::SniffPolicy;
use crate::models::Provider;
use crate::utils::dom;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the navbar and page titles.
pub const APP_NAME: &str = "GenX";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Backend
// =============================================================================

/// Backend used when the page does not override it.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// `<meta>` name holding a backend base URL override.
pub const API_BASE_META_NAME: &str = "genx-api-base";

/// Provider used for login, repositories and content.
pub const DEFAULT_PROVIDER: Provider = Provider::GitHub;

/// Backend base URL for this page.
pub fn api_base_url() -> String {
    dom::meta_content(API_BASE_META_NAME)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Delay before the OAuth success page moves on to the landing page.
pub const AUTH_REDIRECT_DELAY_MS: u32 = 3000;

// =============================================================================
// Logging
// =============================================================================

#[cfg(debug_assertions)]
pub const LOG_LEVEL: LevelFilter = LevelFilter::DEBUG;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: LevelFilter = LevelFilter::INFO;

// =============================================================================
// Navigator
// =============================================================================

/// Viewports matching this query collapse long breadcrumb trails.
pub const NARROW_VIEWPORT_QUERY: &str = "(max-width: 768px)";

/// Maximum breadcrumb segments shown before collapsing on narrow viewports.
pub const BREADCRUMB_COLLAPSE_THRESHOLD: usize = 3;

// =============================================================================
// Preview
// =============================================================================

/// Which decoded bytes are still shown as text.
pub const DEFAULT_SNIFF_POLICY: SniffPolicy = SniffPolicy::Utf8;

/// Syntax theme for highlighted read-only code (a syntect default theme).
pub const HIGHLIGHT_THEME: &str = "base16-ocean.dark";

/// Larger text stays unhighlighted.
pub const HIGHLIGHT_MAX_BYTES: usize = 256 * 1024;

/// Paginated document viewer limits.
pub mod document {
    pub const MIN_SCALE: f64 = 0.5;
    pub const MAX_SCALE: f64 = 3.0;
    pub const DEFAULT_SCALE: f64 = 1.2;
    pub const ZOOM_IN_FACTOR: f64 = 1.25;
    pub const ZOOM_OUT_FACTOR: f64 = 0.8;
}

// =============================================================================
// Icon Theme
// =============================================================================

/// Available icon themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(dead_code)]
pub enum IconTheme {
    Lucide,
    Bootstrap,
}

/// Icon theme used across the UI.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
