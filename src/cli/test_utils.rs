//! Shared test utilities for CLI tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use fundscout::github::{ContentQuery, FileContent};
use fundscout::{RepositoryGateway, RepositoryIdentity, RepositoryMetadata, ResolutionError};

/// A stub gateway serving canned repositories and manifests.
///
/// Unknown repositories answer `NotFound`; repositories without a manifest
/// answer with no file.
#[derive(Clone, Default)]
pub struct StubGateway {
    /// Metadata keyed by `owner/name`.
    pub repositories: HashMap<String, Result<RepositoryMetadata, ResolutionError>>,
    /// Raw manifest text keyed by `owner/name`.
    pub manifests: HashMap<String, String>,
    /// README text keyed by `owner/name`.
    pub readmes: HashMap<String, String>,
    /// First-page commit counts keyed by `owner/name`; unknown names count 0.
    pub commits: HashMap<String, u64>,
    /// Content queries received, in call order.
    pub queries: Arc<Mutex<Vec<ContentQuery>>>,
}

impl StubGateway {
    /// Registers a repository with default metadata.
    #[must_use]
    pub fn with_repository(mut self, full_name: &str, default_branch: &str) -> Self {
        let metadata = RepositoryMetadata {
            name: full_name.rsplit('/').next().unwrap_or(full_name).to_owned(),
            full_name: Some(full_name.to_owned()),
            stars: 3,
            default_branch: Some(default_branch.to_owned()),
            ..Default::default()
        };
        self.repositories.insert(full_name.to_owned(), Ok(metadata));
        self
    }

    /// Registers a manifest body for a repository.
    #[must_use]
    pub fn with_manifest(mut self, full_name: &str, text: &str) -> Self {
        self.manifests.insert(full_name.to_owned(), text.to_owned());
        self
    }

    /// Registers a README body for a repository.
    #[must_use]
    pub fn with_readme(mut self, full_name: &str, text: &str) -> Self {
        self.readmes.insert(full_name.to_owned(), text.to_owned());
        self
    }

    /// Registers a commit count for a repository.
    #[must_use]
    pub fn with_commits(mut self, full_name: &str, count: u64) -> Self {
        self.commits.insert(full_name.to_owned(), count);
        self
    }

    /// Content queries received so far.
    pub fn received_queries(&self) -> Vec<ContentQuery> {
        self.queries
            .lock()
            .expect("queries mutex should be available")
            .clone()
    }
}

#[async_trait]
impl RepositoryGateway for StubGateway {
    async fn repository(
        &self,
        identity: &RepositoryIdentity,
    ) -> Result<RepositoryMetadata, ResolutionError> {
        self.repositories
            .get(&identity.to_string())
            .cloned()
            .unwrap_or_else(|| {
                Err(ResolutionError::NotFound {
                    owner: identity.owner().as_str().to_owned(),
                    name: identity.name().as_str().to_owned(),
                })
            })
    }

    async fn file_content(
        &self,
        identity: &RepositoryIdentity,
        query: &ContentQuery,
    ) -> Result<Option<FileContent>, ResolutionError> {
        self.queries
            .lock()
            .expect("queries mutex should be available")
            .push(query.clone());

        Ok(self
            .manifests
            .get(&identity.to_string())
            .map(String::as_str)
            .map(encoded))
    }

    async fn commit_count(&self, identity: &RepositoryIdentity) -> Result<u64, ResolutionError> {
        Ok(self
            .commits
            .get(&identity.to_string())
            .copied()
            .unwrap_or_default())
    }

    async fn readme(
        &self,
        identity: &RepositoryIdentity,
    ) -> Result<Option<FileContent>, ResolutionError> {
        Ok(self
            .readmes
            .get(&identity.to_string())
            .map(String::as_str)
            .map(encoded))
    }
}

fn encoded(text: &str) -> FileContent {
    FileContent {
        encoding: Some("base64".to_owned()),
        content: STANDARD.encode(text),
    }
}
