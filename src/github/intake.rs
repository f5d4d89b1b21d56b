//! High-level repository resolution facade.

use super::error::ResolutionError;
use super::gateway::RepositoryGateway;
use super::locator::{RepositoryIdentity, resolve};
use super::models::RepositoryMetadata;

/// Resolves references and loads repository metadata through a gateway.
pub struct RepositoryIntake<'client, Gateway>
where
    Gateway: RepositoryGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> RepositoryIntake<'client, Gateway>
where
    Gateway: RepositoryGateway,
{
    /// Create a new intake facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Fetch metadata for an already resolved identity.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::NotFound`] when the repository does not
    /// exist and propagates any other gateway failure.
    pub async fn fetch_metadata(
        &self,
        identity: &RepositoryIdentity,
    ) -> Result<RepositoryMetadata, ResolutionError> {
        self.client.repository(identity).await
    }

    /// Resolve a reference and fetch its metadata.
    ///
    /// Input errors are reported before any request is sent.
    ///
    /// # Errors
    ///
    /// Returns the resolution error for malformed references and otherwise
    /// propagates gateway failures.
    pub async fn load(
        &self,
        reference: &str,
    ) -> Result<(RepositoryIdentity, RepositoryMetadata), ResolutionError> {
        let identity = resolve(reference)?;
        let metadata = self.fetch_metadata(&identity).await?;
        Ok((identity, metadata))
    }
}
