//! Gateways for reading repositories through Octocrab.
//!
//! The [`RepositoryGateway`] trait is the provider capability every
//! resolution and validation step receives explicitly, so tests can swap in
//! a mock while [`OctocrabGateway`] performs the real HTTP requests.

mod client;
mod error_mapping;
mod repository;

pub use client::DEFAULT_API_BASE;
pub use repository::OctocrabGateway;

use async_trait::async_trait;

use crate::github::error::ResolutionError;
use crate::github::locator::RepositoryIdentity;
use crate::github::models::{FileContent, RepositoryMetadata};

/// Identifies one file inside a repository, optionally on a given branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentQuery {
    /// Path relative to the repository root.
    pub path: String,
    /// Branch, tag, or commit to read from; GitHub's default branch when
    /// absent.
    pub branch: Option<String>,
}

impl ContentQuery {
    /// Query for `path` on the default branch.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            branch: None,
        }
    }

    /// Reads from `branch` instead of the default branch.
    #[must_use]
    pub fn on_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }
}

/// Read-only access to repository data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoryGateway: Send + Sync {
    /// Fetch repository metadata.
    ///
    /// Fails with [`ResolutionError::NotFound`] when GitHub has no such
    /// repository.
    async fn repository(
        &self,
        identity: &RepositoryIdentity,
    ) -> Result<RepositoryMetadata, ResolutionError>;

    /// Fetch a single file, returning `Ok(None)` when it does not exist.
    async fn file_content(
        &self,
        identity: &RepositoryIdentity,
        query: &ContentQuery,
    ) -> Result<Option<FileContent>, ResolutionError>;

    /// Count the commits on the first page of the default branch history.
    ///
    /// GitHub pages commits 30 at a time, so the count saturates there.
    /// An empty repository counts zero.
    async fn commit_count(&self, identity: &RepositoryIdentity) -> Result<u64, ResolutionError>;

    /// Fetch the repository README, returning `Ok(None)` when there is none.
    async fn readme(
        &self,
        identity: &RepositoryIdentity,
    ) -> Result<Option<FileContent>, ResolutionError>;
}
