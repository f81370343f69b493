//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`landing`] - User info and repository picker
//! - [`auth`] - Login, OAuth callbacks and sign out
//! - [`explorer`] - Editor window: navigator, editor/preview pane
//! - [`navbar`] - Editor window bars
//! - [`chat`] - Chat side panel
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod auth;
pub mod chat;
pub mod explorer;
pub mod icons;
pub mod landing;
pub mod navbar;
pub mod router;

pub use router::AppRouter;
