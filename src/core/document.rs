//! Paginated document viewer state.
//!
//! The PDF is shown by the browser's built-in viewer; page and zoom are
//! driven through the `#page=N&zoom=P` URL fragment so only the visible page
//! is re-rendered.

use std::sync::LazyLock;

use regex::bytes::Regex;

use crate::config::document::{
    DEFAULT_SCALE, MAX_SCALE, MIN_SCALE, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DocumentState {
    current_page: u32,
    /// Zero until the page count is known.
    total_pages: u32,
    scale: f64,
}

impl Default for DocumentState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            scale: DEFAULT_SCALE,
        }
    }
}

impl DocumentState {
    pub fn new(total_pages: u32) -> Self {
        Self {
            total_pages,
            ..Self::default()
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    fn last_page(&self) -> u32 {
        self.total_pages.max(1)
    }

    pub fn set_total_pages(&mut self, total: u32) {
        self.total_pages = total;
        self.go_to(self.current_page);
    }

    /// Jump to `page`, clamped to `[1, total_pages]`.
    pub fn go_to(&mut self, page: u32) {
        self.current_page = page.clamp(1, self.last_page());
    }

    pub fn next_page(&mut self) {
        self.go_to(self.current_page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.go_to(self.current_page.saturating_sub(1));
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page()
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    pub fn zoom_in(&mut self) {
        self.set_scale(self.scale * ZOOM_IN_FACTOR);
    }

    pub fn zoom_out(&mut self) {
        self.set_scale(self.scale * ZOOM_OUT_FACTOR);
    }

    pub fn zoom_percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }

    /// Fragment for the embedded viewer URL.
    pub fn viewer_fragment(&self) -> String {
        format!("#page={}&zoom={}", self.current_page, self.zoom_percent())
    }
}

const PAGE_OBJECT_PATTERN: &str = r"/Type\s*/Page[^s]";

static PAGE_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PAGE_OBJECT_PATTERN).expect("page object pattern is valid"));

/// Count page objects in a PDF. `None` when none are found.
pub fn count_pdf_pages(bytes: &[u8]) -> Option<u32> {
    let count = PAGE_OBJECT.find_iter(bytes).count();
    (count > 0).then(|| count as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_page_clamping() {
        let mut doc = DocumentState::new(3);
        doc.prev_page();
        assert_eq!(doc.current_page(), 1);
        doc.go_to(10);
        assert_eq!(doc.current_page(), 3);
        assert!(!doc.has_next());
        doc.next_page();
        assert_eq!(doc.current_page(), 3);
        doc.go_to(0);
        assert_eq!(doc.current_page(), 1);
        assert!(!doc.has_prev());
    }

    #[test]
    fn test_unknown_page_count_pins_to_first() {
        let mut doc = DocumentState::default();
        doc.next_page();
        assert_eq!(doc.current_page(), 1);
        doc.set_total_pages(5);
        doc.go_to(4);
        doc.set_total_pages(2);
        assert_eq!(doc.current_page(), 2);
    }

    #[test]
    fn test_zoom_clamping() {
        let mut doc = DocumentState::default();
        assert!(close(doc.scale(), 1.2));
        doc.zoom_in();
        assert!(close(doc.scale(), 1.5));
        for _ in 0..20 {
            doc.zoom_in();
        }
        assert!(close(doc.scale(), MAX_SCALE));
        for _ in 0..20 {
            doc.zoom_out();
        }
        assert!(close(doc.scale(), MIN_SCALE));
    }

    #[test]
    fn test_viewer_fragment() {
        let mut doc = DocumentState::new(4);
        doc.go_to(2);
        assert_eq!(doc.viewer_fragment(), "#page=2&zoom=120");
        doc.zoom_out();
        assert_eq!(doc.zoom_percent(), 96);
    }

    #[test]
    fn test_count_pdf_pages() {
        assert!(Regex::new(PAGE_OBJECT_PATTERN).is_ok());
        let pdf = b"%PDF-1.4\n1 0 obj << /Type /Pages /Count 2 >> endobj\n\
                    2 0 obj << /Type /Page /Parent 1 0 R >> endobj\n\
                    3 0 obj << /Type/Page /Parent 1 0 R >> endobj\n";
        assert_eq!(count_pdf_pages(pdf), Some(2));
        assert_eq!(count_pdf_pages(b"not a pdf"), None);
    }
}
