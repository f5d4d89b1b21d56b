//! Proposal links that open GitHub's file-creation page with a pre-filled
//! manifest.
//!
//! Building the link is plain templating; callers validate the account with
//! [`super::is_valid_account`] first.

use url::Url;

use super::manifest::{FUNDING_FILE, FundingManifest};
use crate::github::{RepositoryIdentity, ResolutionError};

/// Builds the URL of GitHub's in-browser "create new file" page for
/// `FUNDING.json` on `branch`, pre-filled with a manifest owned by
/// `account`.
///
/// # Errors
///
/// Returns [`ResolutionError::InvalidUrl`] when the repository URL cannot
/// be parsed. Branch names are percent-encoded segment by segment, so any
/// branch GitHub accepts yields a link to that branch.
///
/// # Example
///
/// ```
/// use fundscout::funding::proposal_url;
/// use fundscout::github::RepositoryIdentity;
///
/// let identity = RepositoryIdentity::new("potlock", "core").expect("valid identity");
/// let url = proposal_url(&identity, "main", "alice.near").expect("valid URL");
/// assert_eq!(url.path(), "/potlock/core/new/main");
/// assert!(url.query().is_some_and(|query| query.starts_with("filename=FUNDING.json")));
/// ```
pub fn proposal_url(
    identity: &RepositoryIdentity,
    branch: &str,
    account: &str,
) -> Result<Url, ResolutionError> {
    let manifest = FundingManifest::for_account(account).to_pretty_json();
    let mut url = Url::parse(&identity.html_url())
        .map_err(|error| ResolutionError::InvalidUrl(error.to_string()))?;
    // Branch names may contain `#` or `%`; push them as segments so they are
    // percent-encoded rather than read as a fragment or an escape.
    url.path_segments_mut()
        .map_err(|()| {
            ResolutionError::InvalidUrl("repository URL cannot have a path".to_owned())
        })?
        .push("new")
        .extend(branch.split('/'));

    url.query_pairs_mut()
        .append_pair("filename", FUNDING_FILE)
        .append_pair("value", &manifest);

    Ok(url)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::proposal_url;
    use crate::funding::FundingManifest;
    use crate::github::RepositoryIdentity;

    fn identity() -> RepositoryIdentity {
        RepositoryIdentity::new("potlock", "core").expect("identity should be valid")
    }

    #[rstest]
    fn targets_new_file_page_on_branch() {
        let url = proposal_url(&identity(), "develop", "alice.near").expect("URL should build");

        assert_eq!(url.host_str(), Some("github.com"));
        assert_eq!(url.path(), "/potlock/core/new/develop");
    }

    #[rstest]
    fn prefills_filename_and_manifest() {
        let url = proposal_url(&identity(), "main", "alice.near").expect("URL should build");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert_eq!(
            pairs,
            vec![
                ("filename".to_owned(), "FUNDING.json".to_owned()),
                (
                    "value".to_owned(),
                    FundingManifest::for_account("alice.near").to_pretty_json()
                ),
            ]
        );
    }

    #[rstest]
    fn keeps_slashes_in_branch_names() {
        let url =
            proposal_url(&identity(), "release/v1", "alice.near").expect("URL should build");
        assert_eq!(url.path(), "/potlock/core/new/release/v1");
    }

    #[rstest]
    #[case::hash("fix#12", "/potlock/core/new/fix%2312")]
    #[case::percent("feat%41", "/potlock/core/new/feat%2541")]
    #[case::space("my branch", "/potlock/core/new/my%20branch")]
    fn encodes_reserved_characters_in_branch(#[case] branch: &str, #[case] expected: &str) {
        let url = proposal_url(&identity(), branch, "alice.near").expect("URL should build");

        assert_eq!(url.path(), expected);
        assert_eq!(url.fragment(), None, "branch must not leak into the fragment");
        assert!(
            url.query_pairs().any(|(key, _)| key == "filename"),
            "query should survive a reserved branch name"
        );
    }

    #[rstest]
    fn does_not_validate_account() {
        let url = proposal_url(&identity(), "main", "Not A Valid Account")
            .expect("templating never validates");
        assert!(
            url.query_pairs()
                .any(|(key, value)| key == "value" && value.contains("Not A Valid Account")),
            "account should be embedded verbatim"
        );
    }
}
