//! Repository, user and selection types.
//!
//! These describe *which* repository the user is browsing and *who* the user
//! is. They are created from auth endpoint responses and user clicks, then
//! passed by value into the explorer.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Provider
// =============================================================================

/// Source-hosting provider behind the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    GitHub,
}

impl Provider {
    /// Path slug used in backend routes (`/auth/{slug}`, `/api/{slug}`).
    pub fn slug(&self) -> &'static str {
        match self {
            Self::GitHub => "github",
        }
    }

    /// Human-readable provider name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// RepositoryRef
// =============================================================================

/// Identifies the repository being browsed.
///
/// Immutable for the lifetime of a browsing session. Picking another
/// repository replaces the whole value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RepositoryRef {
    pub owner: String,
    pub repo_name: String,
    pub provider: Provider,
}

impl RepositoryRef {
    /// Create a GitHub repository reference.
    pub fn new(owner: impl Into<String>, repo_name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo_name: repo_name.into(),
            provider: Provider::GitHub,
        }
    }

    /// Both owner and repository name are present.
    pub fn is_complete(&self) -> bool {
        !self.owner.trim().is_empty() && !self.repo_name.trim().is_empty()
    }

    /// `owner/repo` label.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo_name)
    }
}

// =============================================================================
// Auth endpoint responses
// =============================================================================

/// Owner object embedded in a repository summary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoOwner {
    #[serde(default)]
    pub login: String,
}

/// One repository from `/auth/{provider}/repos`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub owner: Option<RepoOwner>,
}

impl RepoSummary {
    /// Owner login, falling back to the `owner/` prefix of `full_name`.
    pub fn owner_login(&self) -> Option<String> {
        self.owner
            .as_ref()
            .map(|o| o.login.trim())
            .filter(|login| !login.is_empty())
            .map(String::from)
            .or_else(|| {
                self.full_name
                    .as_deref()
                    .and_then(|full| full.split_once('/'))
                    .map(|(owner, _)| owner.trim().to_string())
                    .filter(|owner| !owner.is_empty())
            })
    }

    /// Build a browsing reference, if the owner can be determined.
    pub fn to_repository_ref(&self) -> Option<RepositoryRef> {
        let owner = self.owner_login()?;
        let repo = RepositoryRef::new(owner, self.name.clone());
        repo.is_complete().then_some(repo)
    }
}

/// Signed-in user from `/auth/{provider}/success`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
}

impl UserInfo {
    /// Name to greet the user with.
    pub fn display_label(&self) -> String {
        [&self.display_name, &self.name, &self.username]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .unwrap_or("user")
            .to_string()
    }

    /// Provider id as text (numeric or string ids both occur).
    pub fn id_label(&self) -> String {
        match &self.id {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => "-".to_string(),
            other => other.to_string(),
        }
    }
}

// =============================================================================
// FileSelection
// =============================================================================

/// A file chosen in the navigator, handed to the preview/editor pane.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSelection {
    pub owner: String,
    pub repo_name: String,
    pub file_path: String,
    pub file_name: String,
}

impl FileSelection {
    /// Select `file_path` inside `repo`. The file name is the last segment.
    pub fn new(repo: &RepositoryRef, file_path: &str) -> Self {
        let file_path = file_path.trim_matches('/').to_string();
        let file_name = file_path
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();
        Self {
            owner: repo.owner.clone(),
            repo_name: repo.repo_name.clone(),
            file_path,
            file_name,
        }
    }

    /// Repository this file belongs to.
    pub fn repository(&self) -> RepositoryRef {
        RepositoryRef::new(self.owner.clone(), self.repo_name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_ref_completeness() {
        assert!(RepositoryRef::new("octocat", "Hello-World").is_complete());
        assert!(!RepositoryRef::new("", "Hello-World").is_complete());
        assert!(!RepositoryRef::new("octocat", "  ").is_complete());
    }

    #[test]
    fn test_owner_login_fallbacks() {
        let json = r#"[
            {"id": 1, "name": "Hello-World", "owner": {"login": "octocat"}},
            {"id": 2, "name": "Spoon-Knife", "full_name": "octocat/Spoon-Knife"},
            {"id": 3, "name": "orphan"}
        ]"#;
        let repos: Vec<RepoSummary> = serde_json::from_str(json).expect("valid json");

        assert_eq!(repos[0].owner_login().as_deref(), Some("octocat"));
        assert_eq!(repos[1].owner_login().as_deref(), Some("octocat"));
        assert_eq!(repos[2].owner_login(), None);
        assert!(repos[2].to_repository_ref().is_none());
        assert_eq!(
            repos[1].to_repository_ref(),
            Some(RepositoryRef::new("octocat", "Spoon-Knife"))
        );
    }

    #[test]
    fn test_user_labels() {
        let user: UserInfo =
            serde_json::from_str(r#"{"id": 583231, "displayName": "The Octocat"}"#)
                .expect("valid json");
        assert_eq!(user.display_label(), "The Octocat");
        assert_eq!(user.id_label(), "583231");

        let user: UserInfo = serde_json::from_str(r#"{"id": "abc", "name": "  "}"#)
            .expect("valid json");
        assert_eq!(user.display_label(), "user");
        assert_eq!(user.id_label(), "abc");
    }

    #[test]
    fn test_file_selection_name() {
        let repo = RepositoryRef::new("octocat", "Hello-World");
        let sel = FileSelection::new(&repo, "docs/guide/README.md");
        assert_eq!(sel.file_name, "README.md");
        assert_eq!(sel.file_path, "docs/guide/README.md");
        assert_eq!(sel.repository(), repo);

        let sel = FileSelection::new(&repo, "LICENSE");
        assert_eq!(sel.file_name, "LICENSE");
    }
}
