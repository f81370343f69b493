//! Browser glue and display helpers.
//!
//! Provides:
//! - `BrowserTransport` - Fetch API transport with timeout (`ContentClient::browser`)
//! - [`ObjectUrl`] - `blob:` URLs revoked on drop
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization
//! - [`format_size`], [`format_count`] - Display formatting

pub mod dom;
mod fetch;
mod format;
mod markdown;
mod object_url;

pub use format::{format_count, format_size};
pub use markdown::markdown_to_html;
pub use object_url::ObjectUrl;
