//! Core logic, independent of the DOM.
//!
//! This module provides:
//! - [`ContentClient`] backend access over an [`HttpTransport`]
//! - [`Navigator`] directory history, breadcrumbs and stale-fetch suppression
//! - [`classify`] file kind and grammar detection
//! - [`resolve_content`] payload decoding with binary sniffing
//! - [`highlight_html`] syntax-highlighted read-only code
//! - [`select_renderer`] preview renderer choice and [`DocumentState`]

pub mod classify;
pub mod client;
pub mod decode;
pub mod dispatch;
pub mod document;
pub mod error;
pub mod highlight;
pub mod navigator;

pub use classify::{ClassifiedFile, DocumentFormat, FileKind, classify};
pub use client::{ContentClient, Endpoints, HttpRequest, HttpResponse, HttpTransport};
pub use decode::{ResolvedContent, SniffPolicy, resolve_content};
pub use dispatch::{Renderer, line_count, select_renderer};
pub use document::{DocumentState, count_pdf_pages};
pub use error::{ContentError, DecodeError};
pub use highlight::highlight_html;
pub use navigator::{BreadcrumbItem, FetchTicket, ListingState, Navigator};
