//! Turning a file payload into something displayable.
//!
//! [`resolve`] is pure and answers either with a final result or with the
//! URL that still has to be downloaded; [`resolve_content`] drives the whole
//! thing through a [`ContentClient`].

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::core::classify::{ClassifiedFile, extension};
use crate::core::client::{ContentClient, HttpTransport};
use crate::core::error::{ContentError, DecodeError};
use crate::models::{ContentEncoding, FileContentPayload};

/// Standard alphabet, padding optional.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Displayable form of a file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedContent {
    Text(String),
    /// The file exists but has no visible content.
    Empty,
    /// Image, video, font or audio served from `url`.
    Media { url: String },
    /// Not renderable as text; offered for download from `url`.
    Binary { url: String },
}

impl ResolvedContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Empty => Some(""),
            _ => None,
        }
    }
}

/// Which decoded bytes still count as text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SniffPolicy {
    /// Printable ASCII and whitespace only.
    Strict,
    /// Valid UTF-8 without control characters other than whitespace.
    #[default]
    Utf8,
}

fn is_text_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\x0c')
}

impl SniffPolicy {
    pub fn accepts(self, bytes: &[u8]) -> bool {
        match self {
            Self::Strict => bytes
                .iter()
                .all(|&b| (0x20..=0x7e).contains(&b) || is_text_whitespace(b as char)),
            Self::Utf8 => std::str::from_utf8(bytes)
                .map(|s| !s.chars().any(|c| c.is_control() && !is_text_whitespace(c)))
                .unwrap_or(false),
        }
    }
}

/// Bytes that were supposed to be text but look like a binary file.
pub fn looks_binary(bytes: &[u8], file_name: &str, policy: SniffPolicy) -> bool {
    let zip_signature = bytes.starts_with(b"PK") && extension(file_name).as_deref() != Some("zip");
    zip_signature || !policy.accepts(bytes)
}

/// Result of the pure resolution step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Ready(Result<ResolvedContent, DecodeError>),
    /// Content has to be fetched from this URL, then passed to [`finish_download`].
    NeedsDownload(String),
}

fn text_or_empty(text: String) -> ResolvedContent {
    if text.trim().is_empty() {
        ResolvedContent::Empty
    } else {
        ResolvedContent::Text(text)
    }
}

fn binary_fallback(download_url: Option<&str>) -> Result<ResolvedContent, DecodeError> {
    download_url
        .map(|url| ResolvedContent::Binary {
            url: url.to_string(),
        })
        .ok_or(DecodeError::BinaryDecodeMismatch)
}

fn decode_base64(raw: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    LENIENT_BASE64.decode(compact)
}

/// Resolve a payload without doing any I/O.
pub fn resolve(
    payload: &FileContentPayload,
    classified: &ClassifiedFile,
    file_name: &str,
    policy: SniffPolicy,
) -> Resolution {
    let download_url = payload.download_url.as_deref();

    if !classified.kind.is_textual() {
        let Some(url) = download_url else {
            return Resolution::Ready(Err(DecodeError::NoDownloadUrl));
        };
        let url = url.to_string();
        let content = if classified.kind.is_media() {
            ResolvedContent::Media { url }
        } else {
            ResolvedContent::Binary { url }
        };
        return Resolution::Ready(Ok(content));
    }

    match (payload.raw_content.as_deref(), payload.encoding) {
        (Some(raw), ContentEncoding::Base64) => {
            let bytes = match decode_base64(raw) {
                Ok(bytes) => bytes,
                Err(err) => {
                    tracing::warn!(file = file_name, "base64 decode failed: {}", err);
                    return Resolution::Ready(binary_fallback(download_url));
                }
            };
            if looks_binary(&bytes, file_name, policy) {
                tracing::warn!(file = file_name, "content looks binary, not showing as text");
                return Resolution::Ready(binary_fallback(download_url));
            }
            let text = String::from_utf8_lossy(&bytes).into_owned();
            Resolution::Ready(Ok(text_or_empty(text)))
        }
        // Oversized files come back with an empty inline body; fetch them instead.
        (Some(raw), ContentEncoding::None) if raw.trim().is_empty() => match download_url {
            Some(url) => Resolution::NeedsDownload(url.to_string()),
            None => Resolution::Ready(Ok(ResolvedContent::Empty)),
        },
        (Some(raw), ContentEncoding::None) => Resolution::Ready(Ok(text_or_empty(raw.to_string()))),
        (None, _) => match download_url {
            Some(url) => Resolution::NeedsDownload(url.to_string()),
            None => Resolution::Ready(Err(DecodeError::NoContentAvailable)),
        },
    }
}

/// Second half of [`resolve`] after a [`Resolution::NeedsDownload`].
pub fn finish_download(
    result: Result<String, ContentError>,
) -> Result<ResolvedContent, DecodeError> {
    result
        .map(text_or_empty)
        .map_err(DecodeError::DownloadFetchFailed)
}

/// Resolve a payload, downloading the raw file when needed.
pub async fn resolve_content<T: HttpTransport>(
    client: &ContentClient<T>,
    payload: &FileContentPayload,
    classified: &ClassifiedFile,
    file_name: &str,
    policy: SniffPolicy,
) -> Result<ResolvedContent, DecodeError> {
    match resolve(payload, classified, file_name, policy) {
        Resolution::Ready(result) => result,
        Resolution::NeedsDownload(url) => finish_download(client.fetch_text(&url).await),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify::classify;
    use crate::core::client::mock::{MockTransport, client};

    const README_B64: &str = "IyBIZWxsbyBXb3JsZAoKRmlyc3QgbGluZQpTZWNvbmQgbGluZQo=";
    const README: &str = "# Hello World\n\nFirst line\nSecond line\n";
    const RAW_URL: &str = "https://raw.example.com/octocat/Hello-World/main/file";

    fn payload(encoding: ContentEncoding, raw: Option<&str>, url: Option<&str>) -> FileContentPayload {
        FileContentPayload {
            encoding,
            raw_content: raw.map(String::from),
            download_url: url.map(String::from),
        }
    }

    fn ready(name: &str, p: &FileContentPayload) -> Result<ResolvedContent, DecodeError> {
        match resolve(p, &classify(name), name, SniffPolicy::default()) {
            Resolution::Ready(result) => result,
            Resolution::NeedsDownload(url) => panic!("unexpected download of {}", url),
        }
    }

    #[test]
    fn test_base64_text() {
        let p = payload(ContentEncoding::Base64, Some(README_B64), None);
        assert_eq!(ready("README.md", &p), Ok(ResolvedContent::Text(README.into())));
    }

    #[test]
    fn test_decoding_is_idempotent() {
        let p = payload(ContentEncoding::Base64, Some(README_B64), None);
        let first = ready("README.md", &p);
        let second = ready("README.md", &p);
        assert_eq!(first, second);
    }

    #[test]
    fn test_base64_with_line_breaks_and_no_padding() {
        let wrapped = "IyBIZWxsbyBX\nb3JsZAoKRmly c3QgbGluZQpT\r\nZWNvbmQgbGluZQo";
        let p = payload(ContentEncoding::Base64, Some(wrapped), None);
        assert_eq!(ready("README.md", &p), Ok(ResolvedContent::Text(README.into())));
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let p = payload(ContentEncoding::Base64, Some("ICAKCQo="), None);
        assert_eq!(ready("blank.txt", &p), Ok(ResolvedContent::Empty));
        let p = payload(ContentEncoding::Base64, Some(""), None);
        assert_eq!(ready("empty.rs", &p), Ok(ResolvedContent::Empty));
    }

    #[test]
    fn test_media_without_download_url() {
        let p = payload(ContentEncoding::Base64, Some("iVBORw0KGgo="), None);
        let err = ready("logo.png", &p).unwrap_err();
        assert_eq!(err, DecodeError::NoDownloadUrl);
        assert_eq!(err.to_string(), "no download URL available");
    }

    #[test]
    fn test_media_and_binary_use_download_url() {
        let p = payload(ContentEncoding::Base64, None, Some(RAW_URL));
        assert_eq!(
            ready("clip.webm", &p),
            Ok(ResolvedContent::Media { url: RAW_URL.into() })
        );
        assert_eq!(
            ready("report.docx", &p),
            Ok(ResolvedContent::Binary { url: RAW_URL.into() })
        );
    }

    #[test]
    fn test_zip_signature_reclassifies_as_binary() {
        let p = payload(ContentEncoding::Base64, Some("UEsDBBQABgA="), Some(RAW_URL));
        assert_eq!(
            ready("report.docx", &p),
            Ok(ResolvedContent::Binary { url: RAW_URL.into() })
        );
        assert_eq!(
            ready("data.txt", &p),
            Ok(ResolvedContent::Binary { url: RAW_URL.into() })
        );

        let p = payload(ContentEncoding::Base64, Some("UEsDBBQABgA="), None);
        assert_eq!(ready("data.txt", &p), Err(DecodeError::BinaryDecodeMismatch));
    }

    #[test]
    fn test_pk_prefix_allowed_for_zip_extension_text() {
        // "PK ok" is plain text; only non-zip names are sniffed on the prefix.
        assert!(!looks_binary(b"PK ok", "notes.zip", SniffPolicy::Strict));
        assert!(looks_binary(b"PK ok", "notes.txt", SniffPolicy::Strict));
    }

    #[test]
    fn test_sniff_policies() {
        let accented = "h\u{e9}llo".as_bytes();
        assert!(!SniffPolicy::Strict.accepts(accented));
        assert!(SniffPolicy::Utf8.accepts(accented));

        assert!(!SniffPolicy::Strict.accepts(b"ab\0cd"));
        assert!(!SniffPolicy::Utf8.accepts(b"ab\0cd"));
        assert!(!SniffPolicy::Utf8.accepts(&[0xff, 0xfe, 0x41]));
        assert!(SniffPolicy::Strict.accepts(b"fn main() {\n\tok();\r\n}\n"));

        let p = payload(ContentEncoding::Base64, Some("aMOpbGxv"), None);
        let strict = resolve(&p, &classify("a.txt"), "a.txt", SniffPolicy::Strict);
        assert_eq!(strict, Resolution::Ready(Err(DecodeError::BinaryDecodeMismatch)));
        assert_eq!(ready("a.txt", &p), Ok(ResolvedContent::Text("h\u{e9}llo".into())));
    }

    #[test]
    fn test_invalid_base64_falls_back_to_download_url() {
        let p = payload(ContentEncoding::Base64, Some("@@not base64@@"), Some(RAW_URL));
        assert_eq!(
            ready("a.txt", &p),
            Ok(ResolvedContent::Binary { url: RAW_URL.into() })
        );
        let p = payload(ContentEncoding::Base64, Some("@@"), None);
        assert_eq!(ready("a.txt", &p), Err(DecodeError::BinaryDecodeMismatch));
    }

    #[test]
    fn test_plain_encoding_and_missing_content() {
        let p = payload(ContentEncoding::None, Some("hello"), Some(RAW_URL));
        assert_eq!(ready("a.txt", &p), Ok(ResolvedContent::Text("hello".into())));

        let p = payload(ContentEncoding::None, Some(""), Some(RAW_URL));
        assert_eq!(
            resolve(&p, &classify("big.json"), "big.json", SniffPolicy::Utf8),
            Resolution::NeedsDownload(RAW_URL.into())
        );

        let p = payload(ContentEncoding::None, None, Some(RAW_URL));
        assert_eq!(
            resolve(&p, &classify("LICENSE"), "LICENSE", SniffPolicy::Utf8),
            Resolution::NeedsDownload(RAW_URL.into())
        );

        let p = payload(ContentEncoding::None, None, None);
        assert_eq!(ready("a.txt", &p), Err(DecodeError::NoContentAvailable));
    }

    #[tokio::test]
    async fn test_resolve_content_downloads() {
        let api = client(MockTransport::new().respond(RAW_URL, 200, "downloaded\n"));
        let p = payload(ContentEncoding::None, None, Some(RAW_URL));

        let result =
            resolve_content(&api, &p, &classify("a.txt"), "a.txt", SniffPolicy::Utf8).await;
        assert_eq!(result, Ok(ResolvedContent::Text("downloaded\n".into())));
        assert_eq!(api.transport().urls(), vec![RAW_URL.to_string()]);
    }

    #[tokio::test]
    async fn test_resolve_content_download_failures() {
        let blank = client(MockTransport::new().respond(RAW_URL, 200, "  \n"));
        let p = payload(ContentEncoding::None, None, Some(RAW_URL));
        let result =
            resolve_content(&blank, &p, &classify("a.txt"), "a.txt", SniffPolicy::Utf8).await;
        assert_eq!(result, Ok(ResolvedContent::Empty));

        let missing = client(MockTransport::new());
        let result =
            resolve_content(&missing, &p, &classify("a.txt"), "a.txt", SniffPolicy::Utf8).await;
        assert_eq!(
            result,
            Err(DecodeError::DownloadFetchFailed(ContentError::NotFound))
        );
    }
}
