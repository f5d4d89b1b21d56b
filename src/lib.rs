//! Fundscout library crate for checking GitHub repositories for Potlock
//! funding manifests.
//!
//! The library wraps Octocrab to resolve repository URLs, fetch repository
//! metadata, read and classify `FUNDING.json`, build proposal links for
//! repositories without a manifest, and check a whole list of repositories
//! concurrently.

pub mod config;
pub mod funding;
pub mod github;
pub mod leaderboard;

pub use config::{FundscoutConfig, OperationMode};
pub use funding::{
    AccountId, FundingCheck, FundingManifest, FundingReport, ManifestOutcome, ManifestValidator,
    is_valid_account, proposal_url,
};
pub use github::{
    OctocrabGateway, PersonalAccessToken, RepositoryGateway, RepositoryIdentity, RepositoryIntake,
    RepositoryMetadata, ResolutionError, resolve,
};
pub use leaderboard::{
    Leaderboard, LeaderboardEntry, LeaderboardRow, LeaderboardSummary, ReferenceList,
};
