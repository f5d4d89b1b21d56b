//! Octocrab implementation of the repository gateway.

use async_trait::async_trait;
use octocrab::Octocrab;
use serde::de::IgnoredAny;

use crate::github::error::ResolutionError;
use crate::github::locator::{PersonalAccessToken, RepositoryIdentity};
use crate::github::models::{ApiContent, ApiRepository, FileContent, RepositoryMetadata};
use crate::github::rate_limit::RateLimitInfo;

use super::client::build_octocrab_client;
use super::error_mapping::{
    is_empty_repository, is_not_found, is_rate_limit_error, map_octocrab_error,
};
use super::{ContentQuery, RepositoryGateway};

/// Octocrab-backed gateway.
pub struct OctocrabGateway {
    client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds a gateway talking to `api_base`, authenticated when a token is
    /// supplied.
    ///
    /// # Errors
    ///
    /// Returns `ResolutionError::Configuration` when the base URI cannot be
    /// parsed or `ResolutionError::Provider` when Octocrab fails to construct
    /// a client.
    pub fn for_api(
        token: Option<&PersonalAccessToken>,
        api_base: &str,
    ) -> Result<Self, ResolutionError> {
        let octocrab = build_octocrab_client(token, api_base)?;
        Ok(Self::new(octocrab))
    }

    async fn map_error_with_rate_limit(
        &self,
        operation: &str,
        error: &octocrab::Error,
    ) -> ResolutionError {
        match error {
            octocrab::Error::GitHub { source, .. } if is_rate_limit_error(source) => {
                // The extra `/rate_limit` read only happens here, after GitHub
                // has already refused a request; successful calls never make it.
                let rate_limit = self.fetch_rate_limit_info().await;
                let base_message =
                    format!("{operation} failed: {message}", message = source.message);
                let message = match &rate_limit {
                    Some(info) => format!(
                        "{base_message} (resets in {seconds}s, at {reset})",
                        seconds = info.seconds_until_reset(),
                        reset = info.reset_at()
                    ),
                    None => base_message,
                };
                tracing::warn!(operation, %message, "GitHub rate limit exceeded");

                ResolutionError::Provider {
                    status: Some(source.status_code.as_u16()),
                    message,
                    rate_limit,
                }
            }
            _ => map_octocrab_error(operation, error),
        }
    }

    async fn fetch_rate_limit_info(&self) -> Option<RateLimitInfo> {
        let rate = self.client.ratelimit().get().await.ok()?.rate;
        let Ok(limit) = u32::try_from(rate.limit) else {
            return None;
        };
        let Ok(remaining) = u32::try_from(rate.remaining) else {
            return None;
        };
        Some(RateLimitInfo::new(limit, remaining, rate.reset))
    }
}

#[async_trait]
impl RepositoryGateway for OctocrabGateway {
    async fn repository(
        &self,
        identity: &RepositoryIdentity,
    ) -> Result<RepositoryMetadata, ResolutionError> {
        tracing::debug!(repository = %identity, "fetching repository metadata");

        match self
            .client
            .get::<ApiRepository, _, _>(identity.repository_path(), None::<&()>)
            .await
        {
            Ok(repository) => Ok(repository.into()),
            Err(error) if is_not_found(&error) => Err(ResolutionError::NotFound {
                owner: identity.owner().as_str().to_owned(),
                name: identity.name().as_str().to_owned(),
            }),
            Err(error) => Err(self.map_error_with_rate_limit("repository", &error).await),
        }
    }

    async fn file_content(
        &self,
        identity: &RepositoryIdentity,
        query: &ContentQuery,
    ) -> Result<Option<FileContent>, ResolutionError> {
        tracing::debug!(
            repository = %identity,
            path = %query.path,
            branch = ?query.branch,
            "fetching file content"
        );

        let route = identity.contents_path(&query.path);
        let response = match query.branch.as_deref() {
            Some(branch) => {
                self.client
                    .get::<ApiContent, _, _>(route, Some(&[("ref", branch)]))
                    .await
            }
            None => self.client.get::<ApiContent, _, _>(route, None::<&()>).await,
        };

        match response {
            Ok(content) => file_only(&query.path, content).map(Some),
            Err(error) if is_not_found(&error) => Ok(None),
            Err(error) => Err(self.map_error_with_rate_limit("file content", &error).await),
        }
    }

    async fn commit_count(&self, identity: &RepositoryIdentity) -> Result<u64, ResolutionError> {
        tracing::debug!(repository = %identity, "counting commits");

        match self
            .client
            .get::<Vec<IgnoredAny>, _, _>(identity.commits_path(), None::<&()>)
            .await
        {
            Ok(commits) => Ok(u64::try_from(commits.len()).unwrap_or(u64::MAX)),
            Err(error) if is_empty_repository(&error) => Ok(0),
            Err(error) if is_not_found(&error) => Err(ResolutionError::NotFound {
                owner: identity.owner().as_str().to_owned(),
                name: identity.name().as_str().to_owned(),
            }),
            Err(error) => Err(self.map_error_with_rate_limit("commits", &error).await),
        }
    }

    async fn readme(
        &self,
        identity: &RepositoryIdentity,
    ) -> Result<Option<FileContent>, ResolutionError> {
        tracing::debug!(repository = %identity, "fetching README");

        match self
            .client
            .get::<ApiContent, _, _>(identity.readme_path(), None::<&()>)
            .await
        {
            Ok(content) => file_only("README", content).map(Some),
            Err(error) if is_not_found(&error) => Ok(None),
            Err(error) => Err(self.map_error_with_rate_limit("readme", &error).await),
        }
    }
}

/// Accepts contents API entries of type `file`; symlinks and submodules are
/// reported as provider errors.
fn file_only(path: &str, content: ApiContent) -> Result<FileContent, ResolutionError> {
    match content.kind.as_deref() {
        Some(kind) if kind != "file" => Err(ResolutionError::Provider {
            status: None,
            message: format!("{path} is a {kind}, not a file"),
            rate_limit: None,
        }),
        _ => Ok(content.into()),
    }
}
