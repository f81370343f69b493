//! Picking a renderer for a resolved file.

use crate::core::classify::{ClassifiedFile, DocumentFormat, FileKind};
use crate::core::decode::ResolvedContent;
use crate::models::ViewToggle;

/// What the preview pane renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Renderer {
    TextEditor { read_only: bool },
    MarkdownPreview,
    ImageViewer,
    VideoViewer,
    FontViewer,
    AudioViewer,
    /// Paginated PDF viewer.
    DocumentPreview,
    /// Download/open links. Carries the document family when the file is a
    /// known binary format.
    BinaryPlaceholder(Option<DocumentFormat>),
}

/// Choose a renderer. `file_name` is only consulted for binary content.
pub fn select_renderer(
    classified: &ClassifiedFile,
    content: &ResolvedContent,
    toggle: ViewToggle,
    file_name: &str,
) -> Renderer {
    match content {
        ResolvedContent::Text(_) | ResolvedContent::Empty => match toggle {
            ViewToggle::Editor => Renderer::TextEditor { read_only: false },
            ViewToggle::Preview if classified.is_markdown() => Renderer::MarkdownPreview,
            ViewToggle::Preview => Renderer::TextEditor { read_only: true },
        },
        ResolvedContent::Media { .. } => match classified.kind {
            FileKind::Image => Renderer::ImageViewer,
            FileKind::Video => Renderer::VideoViewer,
            FileKind::Font => Renderer::FontViewer,
            FileKind::Audio => Renderer::AudioViewer,
            _ => Renderer::BinaryPlaceholder(None),
        },
        ResolvedContent::Binary { .. } if classified.kind == FileKind::Binary => {
            match DocumentFormat::from_file_name(file_name) {
                DocumentFormat::Pdf => Renderer::DocumentPreview,
                format => Renderer::BinaryPlaceholder(Some(format)),
            }
        }
        // Text that turned out to be binary.
        ResolvedContent::Binary { .. } => Renderer::BinaryPlaceholder(None),
    }
}

/// Editor line count: `\n`-separated segments.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}
