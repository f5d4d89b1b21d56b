//! GitHub repository resolution.
//!
//! This module parses repository URLs into identities, wraps Octocrab behind
//! the [`RepositoryGateway`] capability, and maps provider failures into
//! [`ResolutionError`] variants so callers can report them precisely without
//! seeing Octocrab internals.

pub mod error;
pub mod gateway;
pub mod intake;
pub mod locator;
pub mod models;
pub mod rate_limit;

pub use error::ResolutionError;
pub use gateway::{ContentQuery, DEFAULT_API_BASE, OctocrabGateway, RepositoryGateway};
pub use intake::RepositoryIntake;
pub use locator::{
    PersonalAccessToken, RepositoryIdentity, RepositoryName, RepositoryOwner, resolve,
};
pub use models::{FileContent, RepositoryMetadata};
pub use rate_limit::RateLimitInfo;

#[cfg(test)]
pub use gateway::MockRepositoryGateway;

#[cfg(test)]
mod tests;
