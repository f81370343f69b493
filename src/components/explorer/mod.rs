//! Repository explorer: the editor window.
//!
//! Components:
//! - [`EditorWindow`] - Navbars, sidebar navigator, editor pane, chat
//! - `FileList` / `PathBar` - Sidebar listing and toolbar
//! - `PreviewPane` - Renderer for the selected file

#[allow(clippy::module_inception)]
mod explorer;
mod file_list;
mod hook;
mod pathbar;
mod preview;

pub use explorer::EditorWindow;
