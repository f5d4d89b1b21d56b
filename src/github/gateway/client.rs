//! Octocrab client construction helpers for gateway implementations.

use http::Uri;
use octocrab::Octocrab;

use crate::github::error::ResolutionError;
use crate::github::locator::PersonalAccessToken;

use super::error_mapping::map_octocrab_error;

/// Public GitHub REST API endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Builds an Octocrab client for the given API base URL.
///
/// Without a token the client sends unauthenticated requests, which GitHub
/// serves under a much smaller rate limit.
///
/// # Errors
///
/// Returns `ResolutionError::Configuration` when the base URI cannot be
/// parsed and `ResolutionError::Provider` when Octocrab fails to construct a
/// client.
pub(super) fn build_octocrab_client(
    token: Option<&PersonalAccessToken>,
    api_base: &str,
) -> Result<Octocrab, ResolutionError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| ResolutionError::Configuration {
            message: format!("invalid API base `{api_base}`: {error}"),
        })?;

    let mut builder = Octocrab::builder();
    if let Some(personal_token) = token {
        builder = builder.personal_token(personal_token.value());
    }

    builder
        .base_uri(base_uri)
        .map_err(|error| ResolutionError::Configuration {
            message: format!("invalid API base `{api_base}`: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
