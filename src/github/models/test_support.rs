//! Payload builders for tests that stand up a mock GitHub API.
//!
//! # Examples
//!
//! ```
//! use fundscout::github::models::test_support::{contents_payload, repository_payload};
//!
//! let repository = repository_payload("potlock", "core");
//! assert_eq!(repository["default_branch"], "main");
//!
//! let contents = contents_payload("{}");
//! assert_eq!(contents["encoding"], "base64");
//! ```

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};

/// Width GitHub wraps base64 file bodies at.
const BASE64_LINE_WIDTH: usize = 60;

/// Builds a `GET /repos/{owner}/{repo}` response body.
#[must_use]
pub fn repository_payload(owner: &str, name: &str) -> Value {
    json!({
        "name": name,
        "full_name": format!("{owner}/{name}"),
        "owner": {
            "login": owner,
            "avatar_url": format!("https://avatars.githubusercontent.com/{owner}")
        },
        "html_url": format!("https://github.com/{owner}/{name}"),
        "description": format!("{name} repository"),
        "stargazers_count": 10,
        "forks_count": 2,
        "default_branch": "main"
    })
}

/// Builds a contents API response for a file whose body is `text`.
///
/// The body is base64 encoded and wrapped with newlines the way GitHub
/// returns it.
#[must_use]
pub fn contents_payload(text: &str) -> Value {
    let encoded = STANDARD.encode(text);
    let wrapped = encoded
        .as_bytes()
        .chunks(BASE64_LINE_WIDTH)
        .map(String::from_utf8_lossy)
        .collect::<Vec<_>>()
        .join("\n");

    json!({
        "type": "file",
        "name": "FUNDING.json",
        "path": "FUNDING.json",
        "encoding": "base64",
        "content": format!("{wrapped}\n")
    })
}

/// Builds a `FUNDING.json` document naming `account` as the owner.
#[must_use]
pub fn funding_manifest(account: &str) -> String {
    json!({ "potlock": { "near": { "ownedBy": account } } }).to_string()
}
