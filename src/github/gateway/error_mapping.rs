//! Error mapping helpers for the Octocrab gateway.

use http::StatusCode;

use crate::github::error::ResolutionError;

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Checks if GitHub answered 404 Not Found.
pub(super) fn is_not_found(error: &octocrab::Error) -> bool {
    has_status(error, StatusCode::NOT_FOUND)
}

/// Checks if GitHub answered 409 Conflict, which the commits endpoint uses
/// for repositories without any commits.
pub(super) fn is_empty_repository(error: &octocrab::Error) -> bool {
    has_status(error, StatusCode::CONFLICT)
}

fn has_status(error: &octocrab::Error, status: StatusCode) -> bool {
    matches!(
        error,
        octocrab::Error::GitHub { source, .. } if source.status_code == status
    )
}

/// Checks whether the GitHub error represents a rate limit error based on the
/// HTTP status and message / documentation URL content.
pub(super) fn is_rate_limit_error(source: &octocrab::GitHubError) -> bool {
    if source.status_code == StatusCode::TOO_MANY_REQUESTS {
        return true;
    }

    let message_indicates_rate_limit = source.message.to_lowercase().contains("rate limit")
        || source
            .documentation_url
            .as_deref()
            .is_some_and(|url| url.contains("rate-limit"));

    source.status_code == StatusCode::FORBIDDEN && message_indicates_rate_limit
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> ResolutionError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return ResolutionError::Provider {
            status: Some(source.status_code.as_u16()),
            message: format!("{operation} failed: {message}", message = source.message),
            rate_limit: None,
        };
    }

    if is_network_error(error) {
        return ResolutionError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    ResolutionError::Provider {
        status: None,
        message: format!("{operation} failed: {error}"),
        rate_limit: None,
    }
}
