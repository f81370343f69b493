use serde::{Deserialize, Serialize};

// =============================================================================
// Content API response shape
// =============================================================================

/// `type` field of a content item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    File,
    Dir,
    Symlink,
    Submodule,
    #[serde(other)]
    Other,
}

/// One object from the repository contents endpoint.
///
/// A directory request returns an array of these, a file request a single one
/// with `encoding`/`content` filled in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub kind: ContentType,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub encoding: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
}

// =============================================================================
// Directory listing
// =============================================================================

/// Entry kind. Directories order before files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryKind {
    Dir,
    File,
}

/// One row of a directory listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: String,
    pub kind: EntryKind,
    /// Size in bytes (files only)
    pub size: Option<u64>,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

impl From<ContentItem> for Entry {
    fn from(item: ContentItem) -> Self {
        let kind = match item.kind {
            ContentType::Dir => EntryKind::Dir,
            _ => EntryKind::File,
        };
        Self {
            name: item.name,
            path: item.path.trim_matches('/').to_string(),
            kind,
            size: item.size.filter(|_| kind == EntryKind::File),
        }
    }
}

/// Contents of one directory.
///
/// Always sorted: directories first, then files, each group by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    entries: Vec<Entry>,
}

impl DirectoryListing {
    /// Build a listing from entries in any order.
    pub fn new(mut entries: Vec<Entry>) -> Self {
        entries.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (directory count, file count)
    pub fn counts(&self) -> (usize, usize) {
        let dirs = self.entries.iter().filter(|e| e.is_dir()).count();
        (dirs, self.entries.len() - dirs)
    }
}

impl FromIterator<ContentItem> for DirectoryListing {
    fn from_iter<I: IntoIterator<Item = ContentItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Entry::from).collect())
    }
}

// =============================================================================
// File payload
// =============================================================================

/// Encoding declared by the server for `content`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContentEncoding {
    Base64,
    #[default]
    None,
}

/// File payload as delivered by the content endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileContentPayload {
    pub encoding: ContentEncoding,
    pub raw_content: Option<String>,
    pub download_url: Option<String>,
}

impl From<ContentItem> for FileContentPayload {
    fn from(item: ContentItem) -> Self {
        let encoding = match item.encoding.as_deref() {
            Some(enc) if enc.eq_ignore_ascii_case("base64") => ContentEncoding::Base64,
            _ => ContentEncoding::None,
        };
        Self {
            encoding,
            raw_content: item.content,
            download_url: item.download_url.filter(|u| !u.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, kind: EntryKind) -> Entry {
        Entry {
            name: name.to_string(),
            path: name.to_string(),
            kind,
            size: None,
        }
    }

    #[test]
    fn test_listing_dirs_first_then_by_name() {
        let listing = DirectoryListing::new(vec![
            entry("zeta.rs", EntryKind::File),
            entry("src", EntryKind::Dir),
            entry("README.md", EntryKind::File),
            entry("assets", EntryKind::Dir),
            entry("Cargo.toml", EntryKind::File),
        ]);

        let names: Vec<_> = listing.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["assets", "src", "Cargo.toml", "README.md", "zeta.rs"]
        );
        assert_eq!(listing.counts(), (2, 3));
    }

    #[test]
    fn test_listing_order_is_input_independent() {
        let mut items = vec![
            entry("b", EntryKind::File),
            entry("a", EntryKind::Dir),
            entry("a", EntryKind::File),
            entry("c", EntryKind::Dir),
        ];
        let expected = DirectoryListing::new(items.clone());
        items.reverse();
        assert_eq!(DirectoryListing::new(items.clone()), expected);
        items.rotate_left(1);
        assert_eq!(DirectoryListing::new(items), expected);
    }

    #[test]
    fn test_content_item_parsing() {
        let json = r#"[
            {"type": "file", "name": "README", "path": "README", "size": 13,
             "download_url": "https://raw.example.com/README"},
            {"type": "dir", "name": "docs", "path": "docs", "size": 0},
            {"type": "submodule", "name": "vendor", "path": "vendor"},
            {"type": "weird", "name": "x", "path": "x"}
        ]"#;
        let items: Vec<ContentItem> = serde_json::from_str(json).expect("valid json");
        let listing: DirectoryListing = items.into_iter().collect();

        assert_eq!(listing.entries()[0].name, "docs");
        assert!(listing.entries()[0].is_dir());
        assert_eq!(listing.entries()[0].size, None);
        assert_eq!(listing.entries()[1].name, "README");
        assert_eq!(listing.entries()[1].size, Some(13));
        assert_eq!(listing.counts(), (1, 3));
    }

    #[test]
    fn test_payload_from_item() {
        let item: ContentItem = serde_json::from_str(
            r#"{"type": "file", "name": "a.txt", "path": "a.txt",
                "encoding": "base64", "content": "aGk=\n", "download_url": ""}"#,
        )
        .expect("valid json");
        let payload = FileContentPayload::from(item);

        assert_eq!(payload.encoding, ContentEncoding::Base64);
        assert_eq!(payload.raw_content.as_deref(), Some("aGk=\n"));
        assert_eq!(payload.download_url, None);
    }
}
