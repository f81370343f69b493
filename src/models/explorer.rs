//! Explorer-related view state types.

/// Whether the file pane shows the editable source or a rendered preview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewToggle {
    /// Editable text (default)
    #[default]
    Editor,
    /// Rendered preview (markdown as HTML, other text read-only)
    Preview,
}

impl ViewToggle {
    pub fn toggled(self) -> Self {
        match self {
            Self::Editor => Self::Preview,
            Self::Preview => Self::Editor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Editor => "Editor",
            Self::Preview => "Preview",
        }
    }
}
