//! Error types exposed by the GitHub resolution layer.

use thiserror::Error;

use super::rate_limit::RateLimitInfo;

/// Errors surfaced while resolving repository references or talking to
/// GitHub.
///
/// A missing `FUNDING.json` is not represented here; it is the expected
/// [`crate::funding::ManifestOutcome::Missing`] outcome.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolutionError {
    /// The reference is not an absolute `http(s)` URL with an owner and a
    /// repository name.
    #[error("repository URL is invalid: {0}")]
    InvalidUrl(String),

    /// The reference points at a host other than `github.com`.
    #[error("unsupported host `{host}`: only github.com repositories can be checked")]
    UnsupportedHost {
        /// Host name found in the reference.
        host: String,
    },

    /// GitHub reported that the repository does not exist.
    #[error("repository {owner}/{name} was not found")]
    NotFound {
        /// Repository owner as supplied.
        owner: String,
        /// Repository name as supplied.
        name: String,
    },

    /// GitHub answered with a non-success status other than not-found.
    ///
    /// Rate-limit rejections land here too, with `rate_limit` populated
    /// when the quota could be queried.
    #[error(
        "GitHub API error{}: {message}",
        status.map(|code| format!(" ({code})")).unwrap_or_default()
    )]
    Provider {
        /// HTTP status code, when the failure carried one.
        status: Option<u16>,
        /// Message returned by GitHub or describing the failure.
        message: String,
        /// Rate limit snapshot for rate-limit rejections.
        rate_limit: Option<RateLimitInfo>,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// No repository URL was configured for a single-repository check.
    #[error("repository URL is required (use --repo-url or -u)")]
    MissingRepositoryUrl,

    /// Leaderboard mode was requested without a reference list.
    #[error("repository list file is required (use --repos-file or -f)")]
    MissingReferenceList,

    /// A user-entered NEAR account failed validation.
    #[error("invalid NEAR account `{value}`")]
    InvalidAccount {
        /// The rejected account string.
        value: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

impl ResolutionError {
    /// Returns true when GitHub rejected the request because the rate limit
    /// was exhausted.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        match self {
            Self::Provider {
                status,
                message,
                rate_limit,
            } => {
                rate_limit.is_some()
                    || *status == Some(429)
                    || message.to_lowercase().contains("rate limit")
            }
            _ => false,
        }
    }

    /// Returns true for input errors detected before any network access.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidUrl(_) | Self::UnsupportedHost { .. })
    }
}
