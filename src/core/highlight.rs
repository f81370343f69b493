//! Syntax highlighting for read-only code.
//!
//! Grammar tags from [`classify`](crate::core::classify) map onto the
//! syntaxes bundled with syntect. Tags without a bundled syntax render plain.

use std::sync::LazyLock;

use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::config::{HIGHLIGHT_MAX_BYTES, HIGHLIGHT_THEME};

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEMES: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Grammar tag -> file extension syntect knows it by.
fn syntax_extension(language_tag: &str) -> Option<&'static str> {
    let ext = match language_tag {
        "javascript" | "jsx" | "typescript" | "tsx" => "js",
        "markup" => "html",
        "css" | "scss" | "less" => "css",
        "php" => "php",
        "python" => "py",
        "ruby" => "rb",
        "java" => "java",
        "c" => "c",
        "cpp" => "cpp",
        "csharp" => "cs",
        "go" => "go",
        "rust" => "rs",
        "scala" => "scala",
        "groovy" => "groovy",
        "bash" => "sh",
        "sql" => "sql",
        "yaml" => "yaml",
        "json" => "json",
        "markdown" => "md",
        "r" => "r",
        "lua" => "lua",
        "perl" => "pl",
        "clojure" => "clj",
        "diff" => "diff",
        "makefile" => "mk",
        _ => return None,
    };
    Some(ext)
}

/// Highlighted HTML (a styled `<pre>` of `<span>`s), or `None` when the
/// grammar is unknown or the text is too large.
pub fn highlight_html(text: &str, language_tag: &str) -> Option<String> {
    if text.len() > HIGHLIGHT_MAX_BYTES {
        return None;
    }
    let syntax = SYNTAXES.find_syntax_by_extension(syntax_extension(language_tag)?)?;
    let theme = THEMES.themes.get(HIGHLIGHT_THEME)?;

    match highlighted_html_for_string(text, &SYNTAXES, syntax, theme) {
        Ok(html) => Some(html),
        Err(err) => {
            tracing::warn!(language_tag, "highlighting failed: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_produces_styled_spans() {
        let html = highlight_html("fn main() {\n    let x = 1;\n}\n", "rust").unwrap();
        assert!(html.starts_with("<pre"));
        assert!(html.contains("<span style="));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_markdown_produces_styled_spans() {
        let html = highlight_html("# Title\n\n*body*\n", "markdown").unwrap();
        assert!(html.contains("<span style="));
        assert!(html.contains("Title"));
    }

    #[test]
    fn test_html_is_escaped() {
        let html = highlight_html("<script>alert(1)</script>\n", "markup").unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;"));
    }

    #[test]
    fn test_every_mapped_tag_has_a_bundled_syntax() {
        for tag in [
            "javascript", "markup", "css", "php", "python", "ruby", "java", "c", "cpp",
            "csharp", "go", "rust", "scala", "groovy", "bash", "sql", "yaml", "json",
            "markdown", "r", "lua", "perl", "clojure", "diff", "makefile",
        ] {
            let ext = syntax_extension(tag).unwrap();
            assert!(
                SYNTAXES.find_syntax_by_extension(ext).is_some(),
                "no syntax for {tag} ({ext})"
            );
        }
        assert!(THEMES.themes.contains_key(HIGHLIGHT_THEME));
    }

    #[test]
    fn test_plain_and_unmapped_tags_are_not_highlighted() {
        assert_eq!(highlight_html("key = 1\n", "plaintext"), None);
        assert_eq!(highlight_html("[package]\n", "toml"), None);
    }

    #[test]
    fn test_oversized_text_is_not_highlighted() {
        let big = "x".repeat(HIGHLIGHT_MAX_BYTES + 1);
        assert_eq!(highlight_html(&big, "rust"), None);
    }
}
