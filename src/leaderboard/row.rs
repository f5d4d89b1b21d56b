//! Serialisable view of a leaderboard entry for JSON Lines output.

use serde::Serialize;

use super::LeaderboardEntry;
use crate::funding::ManifestOutcome;

/// One leaderboard line. Empty fields are omitted from the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardRow<'entry> {
    /// Reference exactly as supplied.
    pub reference: &'entry str,
    /// `owner/name` when the repository resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    /// Stargazer count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<u64>,
    /// Fork count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forks: Option<u64>,
    /// Manifest outcome when validation completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding: Option<&'entry ManifestOutcome>,
    /// Potlock profile of the owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    /// Error that stopped the entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'entry> From<&'entry LeaderboardEntry> for LeaderboardRow<'entry> {
    fn from(entry: &'entry LeaderboardEntry) -> Self {
        let metadata = entry.metadata.as_ref().ok();
        let funding = entry.outcome();

        Self {
            reference: &entry.reference,
            repository: entry.identity.as_ref().map(ToString::to_string),
            stars: metadata.map(|repository| repository.stars),
            forks: metadata.map(|repository| repository.forks),
            funding,
            profile_url: funding
                .and_then(ManifestOutcome::account)
                .map(|account| account.profile_url()),
            error: entry.error().map(ToString::to_string),
        }
    }
}
