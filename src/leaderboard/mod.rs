//! Batch funding checks for a static list of repositories.
//!
//! Every reference is resolved and validated on its own future; the futures
//! run concurrently and a failure in one entry never affects another.
//! Results come back aligned with the input list.

mod reference_list;
mod row;

pub use reference_list::ReferenceList;
pub use row::LeaderboardRow;

use futures::future::join_all;

use crate::funding::{ManifestOutcome, ManifestValidator};
use crate::github::{
    RepositoryGateway, RepositoryIdentity, RepositoryIntake, RepositoryMetadata, ResolutionError,
    resolve,
};

/// Result of checking one reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// Reference exactly as supplied.
    pub reference: String,
    /// Resolved identity, when the reference parsed.
    pub identity: Option<RepositoryIdentity>,
    /// Metadata or the error that stopped resolution.
    pub metadata: Result<RepositoryMetadata, ResolutionError>,
    /// Manifest outcome; absent when resolution failed.
    pub manifest: Option<Result<ManifestOutcome, ResolutionError>>,
}

impl LeaderboardEntry {
    fn failed(
        reference: &str,
        identity: Option<RepositoryIdentity>,
        error: ResolutionError,
    ) -> Self {
        Self {
            reference: reference.to_owned(),
            identity,
            metadata: Err(error),
            manifest: None,
        }
    }

    /// First error recorded for the entry, if any.
    #[must_use]
    pub fn error(&self) -> Option<&ResolutionError> {
        match (&self.metadata, &self.manifest) {
            (Err(error), _) | (Ok(_), Some(Err(error))) => Some(error),
            _ => None,
        }
    }

    /// Manifest outcome when validation completed.
    #[must_use]
    pub fn outcome(&self) -> Option<&ManifestOutcome> {
        self.manifest.as_ref().and_then(|result| result.as_ref().ok())
    }
}

/// Counts of entry states across a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeaderboardSummary {
    /// Entries checked.
    pub total: usize,
    /// Entries with a valid manifest.
    pub valid: usize,
    /// Entries without a manifest.
    pub missing: usize,
    /// Entries whose manifest is malformed, incomplete, or names a bad
    /// account.
    pub invalid: usize,
    /// Entries that failed with an error.
    pub failed: usize,
    /// Failed entries rejected by the rate limit.
    pub rate_limited: usize,
}

impl LeaderboardSummary {
    /// Tallies `entries`.
    #[must_use]
    pub fn from_entries(entries: &[LeaderboardEntry]) -> Self {
        entries.iter().fold(
            Self {
                total: entries.len(),
                ..Self::default()
            },
            |mut summary, entry| {
                if let Some(error) = entry.error() {
                    summary.failed += 1;
                    if error.is_rate_limited() {
                        summary.rate_limited += 1;
                    }
                } else {
                    match entry.outcome() {
                        Some(ManifestOutcome::Valid { .. }) => summary.valid += 1,
                        Some(ManifestOutcome::Missing) => summary.missing += 1,
                        Some(_) => summary.invalid += 1,
                        None => {}
                    }
                }
                summary
            },
        )
    }
}

/// Runs funding checks over many references through one gateway.
pub struct Leaderboard<'client, Gateway>
where
    Gateway: RepositoryGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> Leaderboard<'client, Gateway>
where
    Gateway: RepositoryGateway,
{
    /// Create a leaderboard reading through `client`.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Resolve and validate every reference concurrently.
    ///
    /// Returns one entry per reference, in input order.
    pub async fn resolve_all<S>(&self, references: &[S]) -> Vec<LeaderboardEntry>
    where
        S: AsRef<str>,
    {
        let entries = join_all(
            references
                .iter()
                .map(|reference| self.resolve_one(reference.as_ref())),
        )
        .await;

        let summary = LeaderboardSummary::from_entries(&entries);
        tracing::info!(
            total = summary.total,
            valid = summary.valid,
            missing = summary.missing,
            invalid = summary.invalid,
            failed = summary.failed,
            "leaderboard resolved"
        );
        entries
    }

    async fn resolve_one(&self, reference: &str) -> LeaderboardEntry {
        let identity = match resolve(reference) {
            Ok(identity) => identity,
            Err(error) => {
                tracing::warn!(reference, %error, "leaderboard entry rejected");
                return LeaderboardEntry::failed(reference, None, error);
            }
        };

        let metadata = match RepositoryIntake::new(self.client)
            .fetch_metadata(&identity)
            .await
        {
            Ok(metadata) => metadata,
            Err(error) => {
                tracing::warn!(reference, %error, "leaderboard entry failed to resolve");
                return LeaderboardEntry::failed(reference, Some(identity), error);
            }
        };

        let manifest = ManifestValidator::new(self.client).validate(&identity).await;
        if let Err(error) = &manifest {
            tracing::warn!(reference, %error, "leaderboard manifest check failed");
        }

        LeaderboardEntry {
            reference: reference.to_owned(),
            identity: Some(identity),
            metadata: Ok(metadata),
            manifest: Some(manifest),
        }
    }
}
