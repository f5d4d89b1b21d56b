//! Proposal link operation for repositories without a manifest.

use std::io::{self, Write};

use fundscout::{
    AccountId, FundingCheck, FundscoutConfig, ManifestOutcome, OctocrabGateway,
    PersonalAccessToken, RepositoryGateway, ResolutionError, proposal_url, resolve,
};

use super::output::{write_proposal, write_proposal_json, write_report, write_report_json};

/// Prints a link that creates `FUNDING.json` owned by the configured account.
///
/// # Errors
///
/// Returns [`ResolutionError::InvalidAccount`] if the account is malformed,
/// input errors for malformed URLs, and provider errors from GitHub.
pub async fn run(config: &FundscoutConfig) -> Result<(), ResolutionError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(config, OctocrabGateway::for_api, &mut stdout).await
}

/// Builds a proposal link using a custom gateway builder.
///
/// The repository is checked first. A link is only offered when the
/// repository has no manifest; otherwise the existing outcome is reported so
/// the user edits the file instead of clobbering it.
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
    let repo_url = config.require_repo_url()?;
    let account = AccountId::parse(config.propose.as_deref().unwrap_or_default())?;
    resolve(repo_url)?;

    let token = config.resolve_token();
    let gateway = build_gateway(token.as_ref(), &config.api_base)?;
    let report = FundingCheck::new(&gateway)
        .check_on_branch(repo_url, config.branch.as_deref())
        .await?;

    if report.manifest != ManifestOutcome::Missing {
        return if config.json {
            write_report_json(writer, &report)
        } else {
            write_report(writer, &report)
        };
    }

    let branch = config
        .branch
        .as_deref()
        .unwrap_or_else(|| report.proposal_branch());
    let url = proposal_url(&report.identity, branch, account.as_str())?;
    tracing::debug!(repository = %report.identity, branch, "built proposal link");

    if config.json {
        write_proposal_json(writer, &report.identity, account.as_str(), branch, &url)
    } else {
        write_proposal(writer, &report.identity, branch, &url)
    }
}
