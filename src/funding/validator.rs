//! Funding manifest validation against a repository gateway.

use crate::github::{ContentQuery, RepositoryGateway, RepositoryIdentity, ResolutionError};

use super::manifest::{FUNDING_FILE, ManifestOutcome, inspect_content};

/// Fetches and classifies a repository's `FUNDING.json`.
///
/// Each call performs exactly one read through the gateway and never
/// retries.
pub struct ManifestValidator<'client, Gateway>
where
    Gateway: RepositoryGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> ManifestValidator<'client, Gateway>
where
    Gateway: RepositoryGateway,
{
    /// Create a validator reading through `client`.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Validate the manifest on the repository's default branch.
    ///
    /// # Errors
    ///
    /// Returns the gateway error when GitHub fails for any reason other than
    /// the file being absent.
    pub async fn validate(
        &self,
        identity: &RepositoryIdentity,
    ) -> Result<ManifestOutcome, ResolutionError> {
        self.fetch(identity, ContentQuery::new(FUNDING_FILE)).await
    }

    /// Validate the manifest on an explicit branch.
    ///
    /// # Errors
    ///
    /// Returns the gateway error when GitHub fails for any reason other than
    /// the file being absent.
    pub async fn validate_at(
        &self,
        identity: &RepositoryIdentity,
        branch: &str,
    ) -> Result<ManifestOutcome, ResolutionError> {
        self.fetch(identity, ContentQuery::new(FUNDING_FILE).on_branch(branch))
            .await
    }

    async fn fetch(
        &self,
        identity: &RepositoryIdentity,
        query: ContentQuery,
    ) -> Result<ManifestOutcome, ResolutionError> {
        let outcome = match self.client.file_content(identity, &query).await? {
            Some(content) => inspect_content(&content),
            None => ManifestOutcome::Missing,
        };
        tracing::debug!(repository = %identity, outcome = %outcome.describe(), "checked manifest");
        Ok(outcome)
    }
}
