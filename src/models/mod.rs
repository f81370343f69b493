//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`RepositoryRef`], [`RepoSummary`], [`UserInfo`] - Who is browsing what
//! - [`ContentItem`], [`DirectoryListing`], [`FileContentPayload`] - Content API shapes
//! - [`FileSelection`] - The file handed to the preview pane
//! - [`AppRoute`] - Hash-based navigation
//! - [`ViewToggle`] - Editor/preview switch

mod content;
mod explorer;
mod repository;
mod route;

pub use content::{
    ContentEncoding, ContentItem, ContentType, DirectoryListing, Entry, EntryKind,
    FileContentPayload,
};
pub use explorer::ViewToggle;
pub use repository::{FileSelection, Provider, RepoOwner, RepoSummary, RepositoryRef, UserInfo};
pub use route::AppRoute;
