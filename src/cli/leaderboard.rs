//! Leaderboard operation over a static list of repositories.

use std::io::{self, Write};

use camino::Utf8Path;
use fundscout::{
    FundscoutConfig, Leaderboard, LeaderboardSummary, OctocrabGateway, PersonalAccessToken,
    ReferenceList, RepositoryGateway, ResolutionError,
};

use super::output::{write_leaderboard, write_leaderboard_jsonl};

/// Checks every repository listed in the configured reference list.
///
/// # Errors
///
/// Returns [`ResolutionError::MissingReferenceList`] if no list is
/// configured and [`ResolutionError::Io`] or
/// [`ResolutionError::Configuration`] if the list cannot be read. Failures
/// of individual entries are reported in the output, not returned.
pub async fn run(config: &FundscoutConfig) -> Result<(), ResolutionError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(config, OctocrabGateway::for_api, &mut stdout).await
}

/// Runs the leaderboard using a custom gateway builder.
///
/// This function is exposed for testing with stub gateways.
pub async fn run_with_gateway_builder<G, F, W>(
    config: &FundscoutConfig,
    build_gateway: F,
    writer: &mut W,
) -> Result<(), ResolutionError>
where
    G: RepositoryGateway,
    F: FnOnce(Option<&PersonalAccessToken>, &str) -> Result<G, ResolutionError>,
    W: Write,
{
    let path = config.require_repos_file()?;
    let references = ReferenceList::load(Utf8Path::new(path))?;

    let token = config.resolve_token();
    let gateway = build_gateway(token.as_ref(), &config.api_base)?;
    let entries = Leaderboard::new(&gateway)
        .resolve_all(references.references())
        .await;

    if config.json {
        write_leaderboard_jsonl(writer, &entries)
    } else {
        write_leaderboard(writer, &entries, &LeaderboardSummary::from_entries(&entries))
    }
}
