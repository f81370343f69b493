//! Content fetch client.
//!
//! Builds backend URLs, issues GETs through an [`HttpTransport`] and turns
//! responses into domain types. Every owner, repository and path segment is
//! percent-encoded on its own, so a `/` inside a segment can never change the
//! shape of the request path.

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::core::error::ContentError;
use crate::models::{
    ContentItem, DirectoryListing, FileContentPayload, Provider, RepoSummary, RepositoryRef,
    UserInfo,
};

// =============================================================================
// Transport
// =============================================================================

/// Outbound GET request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    /// Send session cookies (`credentials: include`).
    pub credentials: bool,
    /// Send `Accept: application/json`.
    pub accept_json: bool,
}

impl HttpRequest {
    /// Request to the backend: cookies + JSON.
    pub fn api(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            credentials: true,
            accept_json: true,
        }
    }

    /// Request for a raw download URL, which usually lives on another origin.
    pub fn raw(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            credentials: false,
            accept_json: false,
        }
    }
}

/// Response as seen by the client: status and body bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Something that can perform a GET.
///
/// Transport-level failures (no response at all) are reported as
/// [`ContentError::NetworkFailure`]; any response, whatever its status, is `Ok`.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, ContentError>;
}

// =============================================================================
// Endpoints
// =============================================================================

/// Backend URL builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    /// Parse a base URL such as `http://localhost:3000`.
    pub fn parse(base: &str) -> Result<Self, ContentError> {
        let base = Url::parse(base)?;
        if base.cannot_be_a_base() {
            return Err(ContentError::InvalidUrl(format!(
                "{} cannot be used as a base URL",
                base
            )));
        }
        Ok(Self { base })
    }

    fn with_segments<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// `/api/{provider}/repos/{owner}/{repo}/contents/{path}`
    ///
    /// The root path (`""`) produces no trailing slash.
    pub fn contents_url(&self, repo: &RepositoryRef, path: &str) -> Url {
        let fixed = [
            "api",
            repo.provider.slug(),
            "repos",
            repo.owner.trim(),
            repo.repo_name.trim(),
            "contents",
        ];
        let path_segments = path.split('/').filter(|s| !s.is_empty());
        self.with_segments(fixed.into_iter().chain(path_segments))
    }

    /// `/auth/{provider}/{action}`
    pub fn auth_url(&self, provider: Provider, action: &str) -> Url {
        self.with_segments(["auth", provider.slug(), action])
    }

    /// `/auth/{provider}`, the OAuth entry point the browser is sent to.
    pub fn login_url(&self, provider: Provider) -> Url {
        self.with_segments(["auth", provider.slug()])
    }
}

// =============================================================================
// Client
// =============================================================================

/// Contents endpoint answer: an array for directories, an object for files.
#[derive(Deserialize)]
#[serde(untagged)]
enum ContentResponse {
    Listing(Vec<ContentItem>),
    Item(Box<ContentItem>),
}

/// Typed access to the backend.
pub struct ContentClient<T> {
    endpoints: Endpoints,
    transport: T,
}

impl<T: HttpTransport> ContentClient<T> {
    pub fn new(endpoints: Endpoints, transport: T) -> Self {
        Self {
            endpoints,
            transport,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// List one directory. `path = ""` is the repository root.
    pub async fn fetch_directory(
        &self,
        repo: &RepositoryRef,
        path: &str,
    ) -> Result<DirectoryListing, ContentError> {
        let url = self.checked_contents_url(repo, path)?;
        let response = self.send(HttpRequest::api(url.as_str())).await?;

        match parse_json::<ContentResponse>(&response)? {
            ContentResponse::Listing(items) => Ok(items.into_iter().collect()),
            ContentResponse::Item(item) => Err(ContentError::RemoteError {
                status: response.status,
                message: format!("{} is a file, not a directory", item.path),
            }),
        }
    }

    /// Fetch one file's payload.
    pub async fn fetch_file_content(
        &self,
        repo: &RepositoryRef,
        path: &str,
    ) -> Result<FileContentPayload, ContentError> {
        let url = self.checked_contents_url(repo, path)?;
        let response = self.send(HttpRequest::api(url.as_str())).await?;

        match parse_json::<ContentResponse>(&response)? {
            ContentResponse::Item(item) => Ok(FileContentPayload::from(*item)),
            ContentResponse::Listing(_) => Err(ContentError::RemoteError {
                status: response.status,
                message: "path is a directory".to_string(),
            }),
        }
    }

    /// Fetch a raw download URL as text.
    pub async fn fetch_text(&self, url: &str) -> Result<String, ContentError> {
        let bytes = self.fetch_bytes(url).await?;
        String::from_utf8(bytes)
            .map_err(|e| ContentError::InvalidResponse(format!("not UTF-8 text: {}", e)))
    }

    /// Fetch a raw download URL as bytes.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ContentError> {
        let response = self.send(HttpRequest::raw(url)).await?;
        Ok(response.body)
    }

    /// The signed-in user. Fails with `Forbidden`/`RemoteError` when signed out.
    pub async fn fetch_user(&self, provider: Provider) -> Result<UserInfo, ContentError> {
        let url = self.endpoints.auth_url(provider, "success");
        let response = self.send(HttpRequest::api(url.as_str())).await?;
        parse_json(&response)
    }

    /// The user's repositories. A non-array answer is treated as no repositories.
    pub async fn fetch_repositories(
        &self,
        provider: Provider,
    ) -> Result<Vec<RepoSummary>, ContentError> {
        let url = self.endpoints.auth_url(provider, "repos");
        let response = self.send(HttpRequest::api(url.as_str())).await?;

        let value: serde_json::Value = parse_json(&response)?;
        if !value.is_array() {
            tracing::warn!("repository list is not an array, treating as empty");
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// End the backend session.
    pub async fn sign_out(&self, provider: Provider) -> Result<(), ContentError> {
        let url = self.endpoints.auth_url(provider, "signout");
        self.send(HttpRequest::api(url.as_str())).await?;
        Ok(())
    }

    fn checked_contents_url(&self, repo: &RepositoryRef, path: &str) -> Result<Url, ContentError> {
        if !repo.is_complete() {
            return Err(ContentError::InvalidRepositoryRef);
        }
        Ok(self.endpoints.contents_url(repo, path))
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ContentError> {
        tracing::debug!(url = %request.url, "GET");
        let response = self.transport.get(&request).await?;

        if response.is_success() {
            Ok(response)
        } else {
            let error = ContentError::from_status(response.status, error_message(&response));
            tracing::error!(url = %request.url, status = response.status, "request failed: {}", error);
            Err(error)
        }
    }
}

fn parse_json<D: DeserializeOwned>(response: &HttpResponse) -> Result<D, ContentError> {
    Ok(serde_json::from_slice(&response.body)?)
}

/// Error text from a failed response: JSON `message` if present, else the body.
fn error_message(response: &HttpResponse) -> String {
    serde_json::from_slice::<serde_json::Value>(&response.body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| response.text().trim().to_string())
}

// =============================================================================
// Test transport
// =============================================================================

#[cfg(test)]
pub(crate) mod mock {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    /// Canned responses keyed by URL; records every request it sees.
    #[derive(Default)]
    pub struct MockTransport {
        routes: RefCell<HashMap<String, Result<HttpResponse, ContentError>>>,
        requests: RefCell<Vec<HttpRequest>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(self, url: &str, status: u16, body: impl Into<Vec<u8>>) -> Self {
            self.routes.borrow_mut().insert(
                url.to_string(),
                Ok(HttpResponse {
                    status,
                    body: body.into(),
                }),
            );
            self
        }

        pub fn fail(self, url: &str, error: ContentError) -> Self {
            self.routes.borrow_mut().insert(url.to_string(), Err(error));
            self
        }

        pub fn requests(&self) -> Vec<HttpRequest> {
            self.requests.borrow().clone()
        }

        pub fn urls(&self) -> Vec<String> {
            self.requests.borrow().iter().map(|r| r.url.clone()).collect()
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for MockTransport {
        async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, ContentError> {
            self.requests.borrow_mut().push(request.clone());
            self.routes
                .borrow()
                .get(&request.url)
                .cloned()
                .unwrap_or_else(|| {
                    Ok(HttpResponse {
                        status: 404,
                        body: br#"{"message":"Not Found"}"#.to_vec(),
                    })
                })
        }
    }

    pub fn client(transport: MockTransport) -> ContentClient<MockTransport> {
        let endpoints = Endpoints::parse("http://localhost:3000").expect("valid base url");
        ContentClient::new(endpoints, transport)
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{MockTransport, client};
    use super::*;
    use crate::models::ContentEncoding;

    const ROOT: &str = "http://localhost:3000/api/github/repos/octocat/Hello-World/contents";

    fn hello_world() -> RepositoryRef {
        RepositoryRef::new("octocat", "Hello-World")
    }

    #[test]
    fn test_root_url_has_no_trailing_slash() {
        let endpoints = Endpoints::parse("http://localhost:3000").unwrap();
        assert_eq!(endpoints.contents_url(&hello_world(), "").as_str(), ROOT);
        assert_eq!(endpoints.contents_url(&hello_world(), "/").as_str(), ROOT);
    }

    #[test]
    fn test_segments_encoded_independently() {
        let endpoints = Endpoints::parse("http://localhost:3000").unwrap();
        let url = endpoints.contents_url(&hello_world(), "a b/c#d");
        assert_eq!(url.as_str(), format!("{}/a%20b/c%23d", ROOT));

        let odd = RepositoryRef::new("own?er", "re/po");
        let url = endpoints.contents_url(&odd, "x");
        assert_eq!(
            url.as_str(),
            "http://localhost:3000/api/github/repos/own%3Fer/re%2Fpo/contents/x"
        );
    }

    #[test]
    fn test_base_with_path_prefix() {
        let endpoints = Endpoints::parse("https://example.com/genx/").unwrap();
        assert_eq!(
            endpoints.auth_url(Provider::GitHub, "repos").as_str(),
            "https://example.com/genx/auth/github/repos"
        );
        assert_eq!(
            endpoints.login_url(Provider::GitHub).as_str(),
            "https://example.com/genx/auth/github"
        );
    }

    #[test]
    fn test_cannot_be_a_base_rejected() {
        assert!(matches!(
            Endpoints::parse("mailto:someone@example.com"),
            Err(ContentError::InvalidUrl(_))
        ));
        assert!(Endpoints::parse("not a url").is_err());
    }

    #[tokio::test]
    async fn test_fetch_root_listing() {
        let body = r#"[
            {"type": "file", "name": "README", "path": "README", "size": 13},
            {"type": "dir", "name": "src", "path": "src"}
        ]"#;
        let client = client(MockTransport::new().respond(ROOT, 200, body));

        let listing = client.fetch_directory(&hello_world(), "").await.unwrap();

        assert_eq!(client.transport().urls(), vec![ROOT.to_string()]);
        let request = &client.transport().requests()[0];
        assert!(request.credentials);
        assert!(request.accept_json);
        assert_eq!(listing.entries()[0].name, "src");
        assert_eq!(listing.entries()[1].name, "README");
    }

    #[tokio::test]
    async fn test_incomplete_ref_makes_no_request() {
        let client = client(MockTransport::new());
        let repo = RepositoryRef::new("", "Hello-World");

        let result = client.fetch_directory(&repo, "").await;
        assert_eq!(result, Err(ContentError::InvalidRepositoryRef));
        let result = client.fetch_file_content(&repo, "README").await;
        assert_eq!(result, Err(ContentError::InvalidRepositoryRef));
        assert!(client.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn test_status_errors() {
        let forbidden = format!("{}/secret", ROOT);
        let broken = format!("{}/broken", ROOT);
        let client = client(
            MockTransport::new()
                .respond(&forbidden, 403, "nope")
                .respond(&broken, 500, r#"{"message": "upstream exploded"}"#),
        );

        assert_eq!(
            client.fetch_directory(&hello_world(), "missing").await,
            Err(ContentError::NotFound)
        );
        assert_eq!(
            client.fetch_directory(&hello_world(), "secret").await,
            Err(ContentError::Forbidden)
        );
        assert_eq!(
            client.fetch_directory(&hello_world(), "broken").await,
            Err(ContentError::RemoteError {
                status: 500,
                message: "upstream exploded".into()
            })
        );
    }

    #[tokio::test]
    async fn test_network_failure_passes_through() {
        let client = client(
            MockTransport::new().fail(ROOT, ContentError::NetworkFailure("timed out".into())),
        );
        assert_eq!(
            client.fetch_directory(&hello_world(), "").await,
            Err(ContentError::NetworkFailure("timed out".into()))
        );
    }

    #[tokio::test]
    async fn test_shape_mismatches() {
        let file_url = format!("{}/README", ROOT);
        let file_body = r#"{"type": "file", "name": "README", "path": "README",
                            "encoding": "base64", "content": "SGk="}"#;
        let client = client(
            MockTransport::new()
                .respond(&file_url, 200, file_body)
                .respond(ROOT, 200, "[]"),
        );

        let err = client
            .fetch_directory(&hello_world(), "README")
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::RemoteError { status: 200, .. }));

        let err = client
            .fetch_file_content(&hello_world(), "")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ContentError::RemoteError {
                status: 200,
                message: "path is a directory".into()
            }
        );

        let payload = client
            .fetch_file_content(&hello_world(), "README")
            .await
            .unwrap();
        assert_eq!(payload.encoding, ContentEncoding::Base64);
        assert_eq!(payload.raw_content.as_deref(), Some("SGk="));
    }

    #[tokio::test]
    async fn test_invalid_json_is_invalid_response() {
        let client = client(MockTransport::new().respond(ROOT, 200, "<html>"));
        assert!(matches!(
            client.fetch_directory(&hello_world(), "").await,
            Err(ContentError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_auth_endpoints() {
        let client = client(
            MockTransport::new()
                .respond(
                    "http://localhost:3000/auth/github/success",
                    200,
                    r#"{"id": 1, "displayName": "Mona"}"#,
                )
                .respond(
                    "http://localhost:3000/auth/github/repos",
                    200,
                    r#"{"error": "unexpected"}"#,
                )
                .respond("http://localhost:3000/auth/github/signout", 200, ""),
        );

        let user = client.fetch_user(Provider::GitHub).await.unwrap();
        assert_eq!(user.display_label(), "Mona");
        let repos = client.fetch_repositories(Provider::GitHub).await.unwrap();
        assert!(repos.is_empty());
        assert_eq!(client.sign_out(Provider::GitHub).await, Ok(()));
    }

    #[tokio::test]
    async fn test_raw_download_skips_credentials() {
        let raw = "https://raw.example.com/octocat/Hello-World/main/README";
        let client = client(MockTransport::new().respond(raw, 200, "Hello World!\n"));

        assert_eq!(client.fetch_text(raw).await.unwrap(), "Hello World!\n");
        let request = &client.transport().requests()[0];
        assert!(!request.credentials);
        assert!(!request.accept_json);
    }
}
