//! Support modules for the leaderboard BDD tests.

#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use state::{LeaderboardState, mount_on, resolve_leaderboard};
