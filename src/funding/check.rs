//! Single-repository funding check.

use futures::try_join;
use url::Url;

use super::manifest::{ManifestOutcome, decode_content};
use super::proposal::proposal_url;
use super::validator::ManifestValidator;
use crate::github::{
    FileContent, RepositoryGateway, RepositoryIdentity, RepositoryIntake, RepositoryMetadata,
    ResolutionError,
};

const FALLBACK_BRANCH: &str = "main";

/// Everything learned about one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundingReport {
    /// Resolved repository identity.
    pub identity: RepositoryIdentity,
    /// Metadata fetched from GitHub.
    pub metadata: RepositoryMetadata,
    /// Manifest classification.
    pub manifest: ManifestOutcome,
    /// Commits on the first page of the default branch history.
    pub commit_count: u64,
    /// Decoded README text, when the repository has a readable one.
    pub readme: Option<String>,
}

impl FundingReport {
    /// Branch a new manifest should be proposed on: the default branch, or
    /// `main` when GitHub did not report one.
    #[must_use]
    pub fn proposal_branch(&self) -> &str {
        self.metadata
            .default_branch
            .as_deref()
            .unwrap_or(FALLBACK_BRANCH)
    }

    /// Link that proposes a manifest owned by `account`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::InvalidUrl`] if the link cannot be built.
    pub fn proposal_url(&self, account: &str) -> Result<Url, ResolutionError> {
        proposal_url(&self.identity, self.proposal_branch(), account)
    }
}

/// Resolves a reference, loads its metadata, and validates its manifest.
pub struct FundingCheck<'client, Gateway>
where
    Gateway: RepositoryGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> FundingCheck<'client, Gateway>
where
    Gateway: RepositoryGateway,
{
    /// Create a check reading through `client`.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Run the full check for one reference.
    ///
    /// Input errors are returned before any request is sent; a missing
    /// manifest is reported through [`FundingReport::manifest`].
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError`] for malformed references, unknown
    /// repositories, and provider failures.
    pub async fn check(&self, reference: &str) -> Result<FundingReport, ResolutionError> {
        self.check_on_branch(reference, None).await
    }

    /// Run the full check, reading the manifest from `branch` when given.
    ///
    /// The commit count and README always come from the default branch.
    ///
    /// # Errors
    ///
    /// See [`FundingCheck::check`].
    pub async fn check_on_branch(
        &self,
        reference: &str,
        branch: Option<&str>,
    ) -> Result<FundingReport, ResolutionError> {
        let (identity, metadata) = RepositoryIntake::new(self.client).load(reference).await?;
        let validator = ManifestValidator::new(self.client);
        let manifest = async {
            match branch {
                Some(name) => validator.validate_at(&identity, name).await,
                None => validator.validate(&identity).await,
            }
        };

        let (manifest, commit_count, readme) = try_join!(
            manifest,
            self.client.commit_count(&identity),
            self.client.readme(&identity),
        )?;
        let readme = readme.and_then(|content| readme_text(&identity, &content));

        Ok(FundingReport {
            identity,
            metadata,
            manifest,
            commit_count,
            readme,
        })
    }
}

fn readme_text(identity: &RepositoryIdentity, content: &FileContent) -> Option<String> {
    decode_content(content)
        .inspect_err(|reason| {
            tracing::warn!(repository = %identity, %reason, "README could not be decoded");
        })
        .ok()
}
