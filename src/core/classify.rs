//! File type classification from the file name alone.
//!
//! Deterministic and total: every name maps to exactly one [`FileKind`].

/// Broad category used to pick a decoder path and a renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileKind {
    Text,
    Image,
    Video,
    Font,
    Audio,
    /// Documents, archives and executables.
    Binary,
    /// No extension. Shown as text with the default grammar.
    Unknown,
}

impl FileKind {
    /// Whether the decoder should try to produce text.
    pub fn is_textual(self) -> bool {
        matches!(self, Self::Text | Self::Unknown)
    }

    /// Served through a media element from the download URL.
    pub fn is_media(self) -> bool {
        matches!(self, Self::Image | Self::Video | Self::Font | Self::Audio)
    }
}

/// Classification result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassifiedFile {
    pub kind: FileKind,
    /// Syntax grammar for textual kinds.
    pub language_tag: Option<&'static str>,
}

impl ClassifiedFile {
    fn of(kind: FileKind) -> Self {
        Self {
            kind,
            language_tag: None,
        }
    }

    fn text(language: &'static str) -> Self {
        Self {
            kind: FileKind::Text,
            language_tag: Some(language),
        }
    }

    pub fn is_markdown(&self) -> bool {
        self.language_tag == Some("markdown")
    }
}

pub const DEFAULT_LANGUAGE: &str = "plaintext";

// =============================================================================
// Extension tables (checked in this order)
// =============================================================================

const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "svg", "webp", "tiff", "tif", "ico", "jfif", "pjpeg",
    "pjp", "avif", "apng",
];

const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "webm", "ogv", "mov", "avi", "wmv", "flv", "mkv", "mpg", "mpeg", "m4v", "3gp", "3g2",
];

const FONT_EXTENSIONS: &[&str] = &[
    "ttf", "otf", "woff", "woff2", "eot", "pfb", "pfm", "tfil", "dfont", "pfa", "afm",
];

const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "flac", "aac", "m4a", "wma"];

const BINARY_EXTENSIONS: &[&str] = &[
    "pdf", "doc", "docx", "docm", "dot", "dotx", "rtf", "xls", "xlsx", "xlsm", "xlt", "xltx",
    "ppt", "pptx", "pptm", "pot", "potx", "pps", "ppsx", "zip", "gz", "tar", "7z", "rar", "jar",
    "exe", "dll", "so", "bin", "class", "wasm", "o", "a", "dylib",
];

/// Extension -> syntax grammar.
fn language_for(extension: &str) -> &'static str {
    match extension {
        "js" | "mjs" | "cjs" => "javascript",
        "jsx" => "jsx",
        "ts" => "typescript",
        "tsx" => "tsx",
        "html" | "htm" | "xml" | "svg" => "markup",
        "css" => "css",
        "scss" | "sass" => "scss",
        "less" => "less",
        "php" => "php",
        "py" => "python",
        "rb" => "ruby",
        "java" => "java",
        "c" | "h" => "c",
        "cpp" | "cc" | "cxx" | "hpp" => "cpp",
        "cs" => "csharp",
        "go" => "go",
        "rs" => "rust",
        "swift" => "swift",
        "kt" | "kts" => "kotlin",
        "scala" => "scala",
        "groovy" | "gradle" => "groovy",
        "dart" => "dart",
        "sh" | "bash" | "zsh" => "bash",
        "ps1" => "powershell",
        "sql" => "sql",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        "json" => "json",
        "md" | "markdown" => "markdown",
        "r" => "r",
        "lua" => "lua",
        "pl" | "pm" | "perl" => "perl",
        "clj" | "cljs" => "clojure",
        "vb" | "vbs" => "clike",
        "docker" | "dockerfile" => "docker",
        "graphql" | "gql" => "graphql",
        "diff" | "patch" => "diff",
        "ini" => "ini",
        "makefile" | "mk" => "makefile",
        _ => DEFAULT_LANGUAGE,
    }
}

/// Lowercase text after the last `.`, if any.
pub fn extension(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    (!ext.is_empty()).then(|| ext.to_ascii_lowercase())
}

/// Classify a file by name.
pub fn classify(file_name: &str) -> ClassifiedFile {
    let base = file_name.rsplit('/').next().unwrap_or(file_name);

    let Some(ext) = extension(base) else {
        return match base {
            "Dockerfile" => ClassifiedFile::text("docker"),
            "Makefile" | "GNUmakefile" => ClassifiedFile::text("makefile"),
            "Jenkinsfile" => ClassifiedFile::text("groovy"),
            _ => ClassifiedFile {
                kind: FileKind::Unknown,
                language_tag: Some(DEFAULT_LANGUAGE),
            },
        };
    };
    let ext = ext.as_str();

    let tables = [
        (IMAGE_EXTENSIONS, FileKind::Image),
        (VIDEO_EXTENSIONS, FileKind::Video),
        (FONT_EXTENSIONS, FileKind::Font),
        (AUDIO_EXTENSIONS, FileKind::Audio),
        (BINARY_EXTENSIONS, FileKind::Binary),
    ];
    tables
        .into_iter()
        .find(|(table, _)| table.contains(&ext))
        .map(|(_, kind)| ClassifiedFile::of(kind))
        .unwrap_or_else(|| ClassifiedFile::text(language_for(ext)))
}

// =============================================================================
// Sub-formats
// =============================================================================

/// Family of a binary document, for labels and preview choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Word,
    Excel,
    PowerPoint,
    Archive,
    Other,
}

impl DocumentFormat {
    pub fn from_file_name(file_name: &str) -> Self {
        match extension(file_name).as_deref() {
            Some("pdf") => Self::Pdf,
            Some("doc" | "docx" | "docm" | "dot" | "dotx" | "rtf") => Self::Word,
            Some("xls" | "xlsx" | "xlsm" | "xlt" | "xltx") => Self::Excel,
            Some("ppt" | "pptx" | "pptm" | "pot" | "potx" | "pps" | "ppsx") => Self::PowerPoint,
            Some("zip" | "gz" | "tar" | "7z" | "rar" | "jar") => Self::Archive,
            _ => Self::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF Document",
            Self::Word => "Word Document",
            Self::Excel => "Excel Spreadsheet",
            Self::PowerPoint => "PowerPoint Presentation",
            Self::Archive => "Archive",
            Self::Other => "Binary File",
        }
    }
}

/// CSS `@font-face` `format()` hint for a font file.
pub fn font_format(file_name: &str) -> &'static str {
    match extension(file_name).as_deref() {
        Some("otf") => "opentype",
        Some("woff") => "woff",
        Some("woff2") => "woff2",
        Some("eot") => "embedded-opentype",
        _ => "truetype",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_table_case_insensitive() {
        for ext in IMAGE_EXTENSIONS {
            assert_eq!(classify(&format!("pic.{}", ext)).kind, FileKind::Image);
            let upper = format!("PIC.{}", ext.to_uppercase());
            assert_eq!(classify(&upper).kind, FileKind::Image, "{}", upper);
        }
    }

    #[test]
    fn test_media_tables() {
        assert_eq!(classify("clip.MP4").kind, FileKind::Video);
        assert_eq!(classify("Inter.woff2").kind, FileKind::Font);
        assert_eq!(classify("theme.ogg").kind, FileKind::Audio);
        assert_eq!(classify("report.docx").kind, FileKind::Binary);
        assert_eq!(classify("release.tar.gz").kind, FileKind::Binary);
    }

    #[test]
    fn test_svg_is_image_not_markup() {
        let c = classify("logo.svg");
        assert_eq!(c.kind, FileKind::Image);
        assert_eq!(c.language_tag, None);
    }

    #[test]
    fn test_names_without_extension() {
        for name in ["LICENSE", "trailingdot.", "", ".", "a/b/NOTES"] {
            let c = classify(name);
            assert_eq!(c.kind, FileKind::Unknown, "{:?}", name);
            assert_eq!(c.language_tag, Some(DEFAULT_LANGUAGE));
            assert!(c.kind.is_textual());
        }
    }

    #[test]
    fn test_dotfiles_use_text_after_dot() {
        let c = classify(".gitignore");
        assert_eq!(c.kind, FileKind::Text);
        assert_eq!(c.language_tag, Some(DEFAULT_LANGUAGE));
    }

    #[test]
    fn test_known_extensionless_names() {
        assert_eq!(classify("Dockerfile").language_tag, Some("docker"));
        assert_eq!(classify("build/Makefile").language_tag, Some("makefile"));
        assert_eq!(classify("Jenkinsfile").kind, FileKind::Text);
    }

    #[test]
    fn test_grammar_lookup() {
        assert_eq!(classify("main.rs").language_tag, Some("rust"));
        assert_eq!(classify("README.md").language_tag, Some("markdown"));
        assert!(classify("README.md").is_markdown());
        assert_eq!(classify("App.JSX").language_tag, Some("jsx"));
        assert_eq!(classify("notes.txt").language_tag, Some(DEFAULT_LANGUAGE));
    }

    #[test]
    fn test_document_format() {
        assert_eq!(DocumentFormat::from_file_name("a.PDF"), DocumentFormat::Pdf);
        assert_eq!(
            DocumentFormat::from_file_name("report.docx").label(),
            "Word Document"
        );
        assert_eq!(DocumentFormat::from_file_name("x.xlsx"), DocumentFormat::Excel);
        assert_eq!(DocumentFormat::from_file_name("lib.so"), DocumentFormat::Other);
    }

    #[test]
    fn test_font_format() {
        assert_eq!(font_format("a.ttf"), "truetype");
        assert_eq!(font_format("a.OTF"), "opentype");
        assert_eq!(font_format("a.eot"), "embedded-opentype");
    }
}
