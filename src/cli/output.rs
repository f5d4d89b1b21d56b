//! Output formatting utilities for CLI operations.
//!
//! Every writer has a text form for people and a JSON Lines form for
//! pipelines; JSON output writes one object per line.

use std::cmp::Reverse;
use std::io::{self, Write};

use fundscout::{
    FundingReport, LeaderboardEntry, LeaderboardRow, LeaderboardSummary, ManifestOutcome,
    RepositoryIdentity, RepositoryMetadata, ResolutionError,
};
use serde::Serialize;
use url::Url;

#[derive(Serialize)]
struct ReportLine<'report> {
    repository: String,
    metadata: &'report RepositoryMetadata,
    funding: &'report ManifestOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile_url: Option<String>,
    commit_count: u64,
    readme: Option<&'report str>,
}

#[derive(Serialize)]
struct ProposalLine<'proposal> {
    repository: String,
    account: &'proposal str,
    branch: &'proposal str,
    proposal_url: &'proposal str,
}

/// Writes a single-repository funding report as text.
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &FundingReport,
) -> Result<(), ResolutionError> {
    let metadata = &report.metadata;
    let full_name = metadata
        .full_name
        .clone()
        .unwrap_or_else(|| report.identity.to_string());

    writeln!(
        writer,
        "{full_name} ({} stars, {} forks)",
        metadata.stars, metadata.forks
    )
    .map_err(|e| io_error(&e))?;
    if let Some(description) = metadata.description.as_deref() {
        writeln!(writer, "{description}").map_err(|e| io_error(&e))?;
    }
    writeln!(writer, "Commits: {}", report.commit_count).map_err(|e| io_error(&e))?;
    writeln!(writer, "README: {}", readme_summary(report.readme.as_deref()))
        .map_err(|e| io_error(&e))?;
    writeln!(writer, "Funding: {}", report.manifest.describe()).map_err(|e| io_error(&e))?;

    match &report.manifest {
        ManifestOutcome::Valid { account, .. } => {
            writeln!(writer, "Profile: {}", account.profile_url()).map_err(|e| io_error(&e))?;
        }
        ManifestOutcome::Missing => {
            writeln!(
                writer,
                "Create one with --propose <near-account> to get a pre-filled link."
            )
            .map_err(|e| io_error(&e))?;
        }
        _ => {}
    }

    Ok(())
}

/// Writes a single-repository funding report as one JSON line.
pub fn write_report_json<W: Write>(
    writer: &mut W,
    report: &FundingReport,
) -> Result<(), ResolutionError> {
    let line = ReportLine {
        repository: report.identity.to_string(),
        metadata: &report.metadata,
        funding: &report.manifest,
        profile_url: report
            .manifest
            .account()
            .map(|account| account.profile_url()),
        commit_count: report.commit_count,
        readme: report.readme.as_deref(),
    };
    write_json_line(writer, &line)
}

/// Writes a proposal link as text.
pub fn write_proposal<W: Write>(
    writer: &mut W,
    identity: &RepositoryIdentity,
    branch: &str,
    url: &Url,
) -> Result<(), ResolutionError> {
    writeln!(
        writer,
        "No FUNDING.json in {identity}. Open this link to create one on `{branch}`:"
    )
    .map_err(|e| io_error(&e))?;
    writeln!(writer, "{url}").map_err(|e| io_error(&e))
}

/// Writes a proposal link as one JSON line.
pub fn write_proposal_json<W: Write>(
    writer: &mut W,
    identity: &RepositoryIdentity,
    account: &str,
    branch: &str,
    url: &Url,
) -> Result<(), ResolutionError> {
    let line = ProposalLine {
        repository: identity.to_string(),
        account,
        branch,
        proposal_url: url.as_str(),
    };
    write_json_line(writer, &line)
}

/// Writes leaderboard entries, most-starred first, and a closing summary as
/// text. Entries that failed to resolve follow in input order.
pub fn write_leaderboard<W: Write>(
    writer: &mut W,
    entries: &[LeaderboardEntry],
    summary: &LeaderboardSummary,
) -> Result<(), ResolutionError> {
    for entry in ranked(entries) {
        let line = match (&entry.metadata, entry.outcome(), entry.error()) {
            (Ok(metadata), Some(outcome), None) => format!(
                "  {} [{} stars] {}",
                display_name(entry, metadata),
                metadata.stars,
                outcome.describe()
            ),
            (_, _, Some(error)) => format!("  {} error: {error}", entry.reference),
            _ => format!("  {} (not checked)", entry.reference),
        };
        writeln!(writer, "{line}").map_err(|e| io_error(&e))?;
    }

    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "{} repositories: {} funded, {} missing, {} invalid, {} failed",
        summary.total, summary.valid, summary.missing, summary.invalid, summary.failed
    )
    .map_err(|e| io_error(&e))?;

    if summary.rate_limited > 0 {
        writeln!(
            writer,
            "{} lookups hit the GitHub rate limit; set --token to raise it.",
            summary.rate_limited
        )
        .map_err(|e| io_error(&e))?;
    }

    Ok(())
}

/// Writes leaderboard entries in JSONL format, one object per entry.
pub fn write_leaderboard_jsonl<W: Write>(
    writer: &mut W,
    entries: &[LeaderboardEntry],
) -> Result<(), ResolutionError> {
    for entry in entries {
        write_json_line(writer, &LeaderboardRow::from(entry))?;
    }
    Ok(())
}

/// Writes a failure message, pointing at the reference when the input itself
/// was rejected.
pub fn write_error<W: Write>(writer: &mut W, error: &ResolutionError) -> io::Result<()> {
    if error.is_input_error() {
        writeln!(writer, "Check the repository URL: {error}")
    } else {
        writeln!(writer, "{error}")
    }
}

fn ranked(entries: &[LeaderboardEntry]) -> Vec<&LeaderboardEntry> {
    let mut ranked: Vec<&LeaderboardEntry> = entries.iter().collect();
    // Stable, so equal star counts keep their input order.
    ranked.sort_by_key(|entry| Reverse(entry.metadata.as_ref().ok().map(|m| m.stars)));
    ranked
}

fn readme_summary(readme: Option<&str>) -> String {
    let Some(text) = readme else {
        return "none".to_owned();
    };
    let lines = text.lines().count();
    match text.lines().map(str::trim).find(|line| !line.is_empty()) {
        Some(first) => format!("{first} ({lines} lines)"),
        None => "empty".to_owned(),
    }
}

fn display_name(entry: &LeaderboardEntry, metadata: &RepositoryMetadata) -> String {
    metadata
        .full_name
        .clone()
        .or_else(|| entry.identity.as_ref().map(ToString::to_string))
        .unwrap_or_else(|| entry.reference.clone())
}

fn write_json_line<W: Write, T: Serialize>(
    writer: &mut W,
    value: &T,
) -> Result<(), ResolutionError> {
    serde_json::to_writer(&mut *writer, value).map_err(|e| ResolutionError::Io {
        message: format!("JSON serialization failed: {e}"),
    })?;
    writeln!(writer).map_err(|e| io_error(&e))
}

/// Converts an I/O error to a [`ResolutionError::Io`].
pub(crate) fn io_error(error: &io::Error) -> ResolutionError {
    ResolutionError::Io {
        message: error.to_string(),
    }
}
