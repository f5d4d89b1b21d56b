//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.fundscout.toml` in the current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `FUNDSCOUT_REPO_URL`, `FUNDSCOUT_TOKEN`,
//!    or legacy `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--repo-url`/`-u`, `--token`/`-t`, ...
//!
//! # Configuration File
//!
//! ```toml
//! token = "ghp_example"
//! repos_file = "repos.json"
//! api_base = "https://api.github.com"
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::{DEFAULT_API_BASE, PersonalAccessToken, ResolutionError};

/// Operation mode determined by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Check one repository for a funding manifest.
    Check,
    /// Build a proposal link for a repository without a manifest.
    Propose,
    /// Check every repository in the reference list.
    Leaderboard,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use fundscout::FundscoutConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = FundscoutConfig::load().expect("failed to load configuration");
/// let repo_url = config.require_repo_url().expect("repository URL required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "FUNDSCOUT",
    discovery(
        dotfile_name = ".fundscout.toml",
        config_file_name = "fundscout.toml",
        app_name = "fundscout"
    )
)]
pub struct FundscoutConfig {
    /// GitHub repository URL to check.
    ///
    /// Can be provided via:
    /// - CLI: `--repo-url <URL>` or `-u <URL>`
    /// - Environment: `FUNDSCOUT_REPO_URL`
    /// - Config file: `repo_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub repo_url: Option<String>,

    /// Personal access token for GitHub API authentication.
    ///
    /// Optional; unauthenticated requests share a small rate limit.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `FUNDSCOUT_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Path to a JSON array of repository URLs for leaderboard runs.
    ///
    /// Can be provided via:
    /// - CLI: `--repos-file <PATH>` or `-f <PATH>`
    /// - Environment: `FUNDSCOUT_REPOS_FILE`
    /// - Config file: `repos_file = "..."`
    #[ortho_config(cli_short = 'f')]
    pub repos_file: Option<String>,

    /// Runs the leaderboard over `repos_file`.
    ///
    /// Can be provided via:
    /// - CLI: `--leaderboard` / `-l`
    /// - Config file: `leaderboard = true`
    #[ortho_config(cli_short = 'l')]
    pub leaderboard: bool,

    /// NEAR account to propose as manifest owner.
    ///
    /// When set together with `repo_url`, prints a link to GitHub's
    /// file-creation page pre-filled with a manifest owned by this account.
    ///
    /// Can be provided via:
    /// - CLI: `--propose <ACCOUNT>` or `-p <ACCOUNT>`
    /// - Environment: `FUNDSCOUT_PROPOSE`
    #[ortho_config(cli_short = 'p')]
    pub propose: Option<String>,

    /// Branch to read the manifest from and to propose it on.
    ///
    /// Defaults to the repository's default branch.
    ///
    /// Can be provided via:
    /// - CLI: `--branch <BRANCH>` or `-b <BRANCH>`
    /// - Environment: `FUNDSCOUT_BRANCH`
    #[ortho_config(cli_short = 'b')]
    pub branch: Option<String>,

    /// GitHub REST API base URL.
    ///
    /// Can be provided via:
    /// - CLI: `--api-base <URL>`
    /// - Environment: `FUNDSCOUT_API_BASE`
    /// - Config file: `api_base = "..."`
    #[ortho_config()]
    pub api_base: String,

    /// Emits JSON Lines instead of text.
    ///
    /// Can be provided via:
    /// - CLI: `--json` / `-j`
    /// - Config file: `json = true`
    #[ortho_config(cli_short = 'j')]
    pub json: bool,
}

impl Default for FundscoutConfig {
    fn default() -> Self {
        Self {
            repo_url: None,
            token: None,
            repos_file: None,
            leaderboard: false,
            propose: None,
            branch: None,
            api_base: DEFAULT_API_BASE.to_owned(),
            json: false,
        }
    }
}

impl FundscoutConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// Returns `None` when no source provides a non-blank value.
    #[must_use]
    pub fn resolve_token(&self) -> Option<PersonalAccessToken> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .and_then(PersonalAccessToken::new)
    }

    /// Returns the repository URL or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::MissingRepositoryUrl`] when no URL is
    /// configured.
    pub fn require_repo_url(&self) -> Result<&str, ResolutionError> {
        self.repo_url
            .as_deref()
            .ok_or(ResolutionError::MissingRepositoryUrl)
    }

    /// Returns the reference list path or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::MissingReferenceList`] when no path is
    /// configured.
    pub fn require_repos_file(&self) -> Result<&str, ResolutionError> {
        self.repos_file
            .as_deref()
            .ok_or(ResolutionError::MissingReferenceList)
    }

    /// Determines the operation mode.
    ///
    /// `Leaderboard` wins when requested explicitly or when only a reference
    /// list is configured; `Propose` when an account to propose is set;
    /// `Check` otherwise.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.leaderboard || (self.repos_file.is_some() && self.repo_url.is_none()) {
            OperationMode::Leaderboard
        } else if self.propose.is_some() {
            OperationMode::Propose
        } else {
            OperationMode::Check
        }
    }
}

#[cfg(test)]
mod tests;
