//! Data models for repository metadata and file contents.
//!
//! Types prefixed with `Api` are internal deserialisation targets for the
//! GitHub REST API that convert into the public domain types.

use serde::{Deserialize, Serialize};

#[cfg(feature = "test-support")]
pub mod test_support;

/// Read-only snapshot of a repository as reported by GitHub.
///
/// Fetched fresh for every resolution and never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepositoryMetadata {
    /// Repository display name.
    pub name: String,
    /// `owner/name` as GitHub spells it.
    pub full_name: Option<String>,
    /// Owner login.
    pub owner_login: Option<String>,
    /// Owner avatar URL.
    pub owner_avatar_url: Option<String>,
    /// Browser URL of the repository.
    pub html_url: Option<String>,
    /// Repository description.
    pub description: Option<String>,
    /// Stargazer count.
    pub stars: u64,
    /// Fork count.
    pub forks: u64,
    /// Default branch name.
    pub default_branch: Option<String>,
}

/// Raw file content as returned by the contents API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    /// Transport encoding reported by GitHub, usually `base64`.
    pub encoding: Option<String>,
    /// Encoded file body.
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiRepository {
    pub(super) name: String,
    pub(super) full_name: Option<String>,
    pub(super) owner: Option<ApiOwner>,
    pub(super) html_url: Option<String>,
    pub(super) description: Option<String>,
    #[serde(default)]
    pub(super) stargazers_count: u64,
    #[serde(default)]
    pub(super) forks_count: u64,
    pub(super) default_branch: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiOwner {
    pub(super) login: Option<String>,
    pub(super) avatar_url: Option<String>,
}

/// Contents API response for a single file.
///
/// Directories come back as arrays and fail to deserialise into this type.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiContent {
    #[serde(rename = "type")]
    pub(super) kind: Option<String>,
    pub(super) encoding: Option<String>,
    #[serde(default)]
    pub(super) content: String,
}

impl From<ApiRepository> for RepositoryMetadata {
    fn from(value: ApiRepository) -> Self {
        let (owner_login, owner_avatar_url) = value
            .owner
            .map_or((None, None), |owner| (owner.login, owner.avatar_url));

        Self {
            name: value.name,
            full_name: value.full_name,
            owner_login,
            owner_avatar_url,
            html_url: value.html_url,
            description: value.description,
            stars: value.stargazers_count,
            forks: value.forks_count,
            default_branch: value.default_branch,
        }
    }
}

impl From<ApiContent> for FileContent {
    fn from(value: ApiContent) -> Self {
        Self {
            encoding: value.encoding,
            content: value.content,
        }
    }
}
