//! Tests for operation mode determination.

use rstest::rstest;

use crate::FundscoutConfig;
use crate::config::OperationMode;

#[rstest]
fn operation_mode_check_when_repo_url_present() {
    let config = FundscoutConfig {
        repo_url: Some("https://github.com/potlock/core".to_owned()),
        ..Default::default()
    };

    assert_eq!(
        config.operation_mode(),
        OperationMode::Check,
        "should be Check when only repo_url is set"
    );
}

#[rstest]
fn operation_mode_check_when_no_fields_set() {
    let config = FundscoutConfig::default();

    assert_eq!(
        config.operation_mode(),
        OperationMode::Check,
        "should default to Check so a missing URL is reported"
    );
}

#[rstest]
fn operation_mode_propose_when_account_present() {
    let config = FundscoutConfig {
        repo_url: Some("https://github.com/potlock/core".to_owned()),
        propose: Some("alice.near".to_owned()),
        ..Default::default()
    };

    assert_eq!(
        config.operation_mode(),
        OperationMode::Propose,
        "should be Propose when an account is supplied"
    );
}

#[rstest]
fn operation_mode_leaderboard_when_only_repos_file_present() {
    let config = FundscoutConfig {
        repos_file: Some("repos.json".to_owned()),
        ..Default::default()
    };

    assert_eq!(
        config.operation_mode(),
        OperationMode::Leaderboard,
        "a reference list without a URL implies Leaderboard"
    );
}

#[rstest]
fn repo_url_takes_precedence_over_repos_file() {
    let config = FundscoutConfig {
        repo_url: Some("https://github.com/potlock/core".to_owned()),
        repos_file: Some("repos.json".to_owned()),
        ..Default::default()
    };

    assert_eq!(
        config.operation_mode(),
        OperationMode::Check,
        "repo_url should win over a configured reference list"
    );
}

#[rstest]
fn leaderboard_flag_takes_precedence_over_everything() {
    let config = FundscoutConfig {
        repo_url: Some("https://github.com/potlock/core".to_owned()),
        propose: Some("alice.near".to_owned()),
        leaderboard: true,
        ..Default::default()
    };

    assert_eq!(
        config.operation_mode(),
        OperationMode::Leaderboard,
        "explicit leaderboard flag should win"
    );
}

#[rstest]
fn operation_mode_ignores_output_fields() {
    let config = FundscoutConfig {
        json: true,
        branch: Some("develop".to_owned()),
        ..Default::default()
    };

    assert_eq!(
        config.operation_mode(),
        OperationMode::Check,
        "output and branch fields should not affect operation mode"
    );
}
