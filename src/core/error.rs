//! Error types for content fetching and decoding.
//!
//! - [`ContentError`] - Failures talking to the backend (auth + content API)
//! - [`DecodeError`] - Failures turning a file payload into something renderable
//!
//! An empty file is *not* an error; it resolves to
//! [`ResolvedContent::Empty`](super::decode::ResolvedContent::Empty).

use thiserror::Error;

/// Errors surfaced by the content fetch client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// Owner or repository name missing; no request was made.
    #[error("missing owner or repository name")]
    InvalidRepositoryRef,
    /// HTTP 404
    #[error("path not found")]
    NotFound,
    /// HTTP 403
    #[error("access denied")]
    Forbidden,
    /// Any other non-2xx status.
    #[error("server error ({status}): {message}")]
    RemoteError { status: u16, message: String },
    /// No response (offline, CORS, timeout).
    #[error("network failure: {0}")]
    NetworkFailure(String),
    /// Response arrived but could not be understood.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    /// Request URL could not be built.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}

impl ContentError {
    /// Map a non-success HTTP status to an error.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            404 => Self::NotFound,
            403 => Self::Forbidden,
            _ => Self::RemoteError { status, message },
        }
    }

    /// Short message for inline display next to a retry control.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidRepositoryRef => {
                "No repository selected: missing owner or repository name.".to_string()
            }
            Self::NotFound => "Path not found in this repository.".to_string(),
            Self::Forbidden => "Access denied. Try signing in again.".to_string(),
            Self::RemoteError { status, message } if message.is_empty() => {
                format!("Server returned an error ({}).", status)
            }
            Self::RemoteError { message, .. } => message.clone(),
            Self::NetworkFailure(_) => "Could not reach the server.".to_string(),
            Self::InvalidResponse(_) | Self::InvalidUrl(_) => self.to_string(),
        }
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}

impl From<url::ParseError> for ContentError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

/// Errors from resolving a file payload into displayable content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Media or binary file without a `download_url`.
    #[error("no download URL available")]
    NoDownloadUrl,
    /// Text was expected but the bytes look binary, and there is no URL to fall back to.
    #[error("file content looks binary and cannot be shown as text")]
    BinaryDecodeMismatch,
    /// Fetching the raw download URL failed.
    #[error("failed to download file: {0}")]
    DownloadFetchFailed(#[source] ContentError),
    /// Neither inline content nor a download URL.
    #[error("no content available for this file")]
    NoContentAvailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ContentError::from_status(404, String::new()),
            ContentError::NotFound
        );
        assert_eq!(
            ContentError::from_status(403, "rate limited".into()),
            ContentError::Forbidden
        );
        assert_eq!(
            ContentError::from_status(502, "bad gateway".into()),
            ContentError::RemoteError {
                status: 502,
                message: "bad gateway".into()
            }
        );
    }

    #[test]
    fn test_invalid_ref_is_distinct_from_not_found() {
        let missing = ContentError::InvalidRepositoryRef.user_message();
        let not_found = ContentError::NotFound.user_message();
        assert_ne!(missing, not_found);
        assert!(missing.contains("missing owner"));
        assert!(not_found.contains("not found"));
    }

    #[test]
    fn test_decode_error_messages() {
        assert_eq!(
            DecodeError::NoDownloadUrl.to_string(),
            "no download URL available"
        );
        assert_eq!(
            DecodeError::DownloadFetchFailed(ContentError::NotFound).to_string(),
            "failed to download file: path not found"
        );
    }
}
