//! Single repository funding check.

use std::io::{self, Write};

use fundscout::{
    FundingCheck, FundscoutConfig, OctocrabGateway, PersonalAccessToken, RepositoryGateway,
    ResolutionError, resolve,
};

use super::output::{write_report, write_report_json};

/// Checks the configured repository for a funding manifest.
///
/// # Errors
///
/// Returns [`ResolutionError::MissingRepositoryUrl`] if no URL is configured,
/// input errors for malformed URLs, and provider errors from GitHub.
pub async fn run(config: &FundscoutConfig) -> Result<(), ResolutionError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(config, OctocrabGateway::for_api, &mut stdout).await
}

/// Checks a repository using a custom gateway builder.
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
    let repo_url = config.require_repo_url()?;
    resolve(repo_url)?;

    let token = config.resolve_token();
    let gateway = build_gateway(token.as_ref(), &config.api_base)?;
    let report = FundingCheck::new(&gateway)
        .check_on_branch(repo_url, config.branch.as_deref())
        .await?;

    if config.json {
        write_report_json(writer, &report)
    } else {
        write_report(writer, &report)
    }
}

#[cfg(test)]
mod tests {
    use fundscout::{FundscoutConfig, ResolutionError};
    use rstest::rstest;

    use super::run_with_gateway_builder;
    use crate::cli::test_utils::StubGateway;

    const MANIFEST: &str = r#"{"potlock":{"near":{"ownedBy":"alice.near"}}}"#;

    fn config(repo_url: &str) -> FundscoutConfig {
        FundscoutConfig {
            repo_url: Some(repo_url.to_owned()),
            token: Some("ghp_example".to_owned()),
            ..Default::default()
        }
    }

    #[rstest]
    #[tokio::test]
    async fn check_passes_token_and_api_base_and_writes_report() {
        let gateway = StubGateway::default()
            .with_repository("potlock/core", "main")
            .with_manifest("potlock/core", MANIFEST);

        let mut buffer = Vec::new();
        run_with_gateway_builder(
            &config("https://github.com/potlock/core"),
            move |token, api_base| {
                assert_eq!(
                    token.map(|value| value.value()),
                    Some("ghp_example"),
                    "unexpected token passed to gateway builder"
                );
                assert_eq!(api_base, "https://api.github.com");
                Ok(gateway)
            },
            &mut buffer,
        )
        .await
        .expect("check should succeed");

        let output = String::from_utf8(buffer).expect("output should be valid UTF-8");
        assert!(
            output.contains("Funding: valid, owned by alice.near"),
            "missing outcome: {output}"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn check_reads_configured_branch() {
        let gateway = StubGateway::default().with_repository("potlock/core", "main");
        let recorder = gateway.clone();
        let config = FundscoutConfig {
            branch: Some("develop".to_owned()),
            json: true,
            ..config("https://github.com/potlock/core")
        };

        let mut buffer = Vec::new();
        run_with_gateway_builder(&config, |_token, _api_base| Ok(gateway), &mut buffer)
            .await
            .expect("check should succeed");

        let queries = recorder.received_queries();
        assert_eq!(queries.len(), 1, "expected exactly one manifest read");
        assert_eq!(
            queries.first().and_then(|query| query.branch.as_deref()),
            Some("develop")
        );

        let output = String::from_utf8(buffer).expect("output should be valid UTF-8");
        assert!(output.contains(r#""status":"missing""#), "missing JSON outcome: {output}");
    }

    #[rstest]
    #[tokio::test]
    async fn check_rejects_bad_url_before_building_gateway() {
        let mut buffer = Vec::new();
        let result = run_with_gateway_builder(
            &config("https://gitlab.com/potlock/core"),
            |_token, _api_base| -> Result<StubGateway, ResolutionError> {
                panic!("gateway should not be built for rejected input")
            },
            &mut buffer,
        )
        .await;

        assert_eq!(
            result,
            Err(ResolutionError::UnsupportedHost {
                host: "gitlab.com".to_owned()
            })
        );
        assert!(buffer.is_empty(), "nothing should be written on failure");
    }

    #[rstest]
    #[tokio::test]
    async fn check_requires_repo_url() {
        let mut buffer = Vec::new();
        let result = run_with_gateway_builder(
            &FundscoutConfig::default(),
            |_token, _api_base| Ok(StubGateway::default()),
            &mut buffer,
        )
        .await;

        assert_eq!(result, Err(ResolutionError::MissingRepositoryUrl));
    }

    #[rstest]
    #[tokio::test]
    async fn check_propagates_not_found() {
        let mut buffer = Vec::new();
        let result = run_with_gateway_builder(
            &config("https://github.com/potlock/gone"),
            |_token, _api_base| Ok(StubGateway::default()),
            &mut buffer,
        )
        .await;

        assert!(
            matches!(result, Err(ResolutionError::NotFound { .. })),
            "expected NotFound, got {result:?}"
        );
    }
}
