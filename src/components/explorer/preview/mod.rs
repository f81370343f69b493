//! Editor/preview pane.
//!
//! [`use_preview`] loads the selected file; [`PreviewPane`] dispatches it to
//! the matching renderer.

mod content;
mod document;
mod editor;
mod hook;
mod media;

pub use content::PreviewPane;
pub use hook::use_preview;
