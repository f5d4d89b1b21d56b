//! Scenario state and leaderboard execution for the leaderboard BDD tests.

use fundscout::{Leaderboard, LeaderboardEntry, OctocrabGateway, ResolutionError};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use wiremock::{Mock, MockServer};

use super::runtime::{SharedRuntime, ensure_runtime_and_server, mount};

#[derive(ScenarioState, Default)]
pub(crate) struct LeaderboardState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) references: Slot<Vec<String>>,
    pub(crate) entries: Slot<Vec<LeaderboardEntry>>,
}

/// Mounts `mock` on the scenario's mock GitHub API.
pub(crate) fn mount_on(state: &LeaderboardState, mock: Mock) {
    mount(&state.runtime, &state.server, mock);
}

/// Runs the leaderboard over the collected references against the mock API.
pub(crate) fn resolve_leaderboard(
    state: &LeaderboardState,
) -> Result<Vec<LeaderboardEntry>, ResolutionError> {
    let runtime = ensure_runtime_and_server(&state.runtime, &state.server).map_err(|error| {
        ResolutionError::Io {
            message: error.to_string(),
        }
    })?;
    let api_base = state
        .server
        .with_ref(MockServer::uri)
        .ok_or_else(|| ResolutionError::Configuration {
            message: "mock server URL missing".to_owned(),
        })?;
    let references = state.references.get().unwrap_or_default();

    runtime.block_on(async {
        let gateway = OctocrabGateway::for_api(None, &api_base)?;
        Ok(Leaderboard::new(&gateway).resolve_all(&references).await)
    })
}
