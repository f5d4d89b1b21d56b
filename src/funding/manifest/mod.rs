//! `FUNDING.json` decoding and schema checks.
//!
//! The expected document shape is:
//!
//! ```json
//! { "potlock": { "near": { "ownedBy": "alice.near" } } }
//! ```
//!
//! Unknown sibling keys are kept in the parsed document but otherwise
//! ignored.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use serde_json::Value;

use super::account::AccountId;
use crate::github::FileContent;

/// Repository-root path of the manifest.
pub const FUNDING_FILE: &str = "FUNDING.json";

/// Keys walked, in order, to reach the owning account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ManifestField {
    /// The funding platform key, `potlock`.
    #[serde(rename = "potlock")]
    Platform,
    /// The network key under the platform, `near`.
    #[serde(rename = "near")]
    Network,
    /// The account field under the network, `ownedBy`.
    #[serde(rename = "ownedBy")]
    OwnedBy,
}

impl ManifestField {
    /// JSON key for this field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Platform => "potlock",
            Self::Network => "near",
            Self::OwnedBy => "ownedBy",
        }
    }
}

impl fmt::Display for ManifestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed `FUNDING.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FundingManifest(Value);

impl FundingManifest {
    /// The full JSON document, including keys this crate does not inspect.
    #[must_use]
    pub const fn document(&self) -> &Value {
        &self.0
    }

    /// Builds the minimal manifest naming `account` as owner.
    #[must_use]
    pub fn for_account(account: &str) -> Self {
        Self(serde_json::json!({ "potlock": { "near": { "ownedBy": account } } }))
    }

    /// Renders the document with two-space indentation.
    #[must_use]
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

/// Result of checking a repository for a funding manifest.
///
/// `Missing` is an expected state, not a failure: it drives the offer to
/// create a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ManifestOutcome {
    /// The manifest exists and names a well-formed account.
    Valid {
        /// Parsed manifest document.
        manifest: FundingManifest,
        /// Owning account extracted from `potlock.near.ownedBy`.
        account: AccountId,
    },
    /// The repository has no `FUNDING.json`.
    Missing,
    /// The file exists but could not be decoded or parsed as JSON.
    MalformedEncoding {
        /// What went wrong while decoding.
        reason: String,
    },
    /// The document lacks one of the required keys.
    MissingField {
        /// First absent key in walk order.
        field: ManifestField,
    },
    /// `ownedBy` is present but not a valid account.
    InvalidAccount {
        /// The rejected value, as found in the document.
        value: String,
    },
}

impl ManifestOutcome {
    /// Returns true for [`ManifestOutcome::Valid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// The owning account of a valid manifest.
    #[must_use]
    pub const fn account(&self) -> Option<&AccountId> {
        match self {
            Self::Valid { account, .. } => Some(account),
            _ => None,
        }
    }

    /// Short human-readable description.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Valid { account, .. } => format!("valid, owned by {account}"),
            Self::Missing => format!("no {FUNDING_FILE} found"),
            Self::MalformedEncoding { reason } => {
                format!("{FUNDING_FILE} is not valid JSON: {reason}")
            }
            Self::MissingField { field } => {
                format!("{FUNDING_FILE} is missing the \"{field}\" field")
            }
            Self::InvalidAccount { value } => {
                format!("{FUNDING_FILE} names an invalid NEAR account: {value}")
            }
        }
    }
}

/// Decodes and checks a file returned by the contents API.
#[must_use]
pub fn inspect_content(content: &FileContent) -> ManifestOutcome {
    match decode_content(content) {
        Ok(text) => inspect_manifest(&text),
        Err(reason) => ManifestOutcome::MalformedEncoding { reason },
    }
}

/// Checks manifest text against the expected shape.
///
/// # Example
///
/// ```
/// use fundscout::funding::{ManifestField, ManifestOutcome, inspect_manifest};
///
/// let outcome = inspect_manifest(r#"{ "potlock": {} }"#);
/// assert_eq!(
///     outcome,
///     ManifestOutcome::MissingField { field: ManifestField::Network }
/// );
/// ```
#[must_use]
pub fn inspect_manifest(text: &str) -> ManifestOutcome {
    let document: Value = match serde_json::from_str(text) {
        Ok(document) => document,
        Err(error) => {
            return ManifestOutcome::MalformedEncoding {
                reason: error.to_string(),
            };
        }
    };

    let owned_by = match walk(&document) {
        Ok(value) => value,
        Err(field) => return ManifestOutcome::MissingField { field },
    };

    let Some(candidate) = owned_by.as_str() else {
        return ManifestOutcome::InvalidAccount {
            value: owned_by.to_string(),
        };
    };

    match AccountId::parse(candidate) {
        Ok(account) => ManifestOutcome::Valid {
            manifest: FundingManifest(document),
            account,
        },
        Err(_) => ManifestOutcome::InvalidAccount {
            value: candidate.to_owned(),
        },
    }
}

fn walk(document: &Value) -> Result<&Value, ManifestField> {
    [
        ManifestField::Platform,
        ManifestField::Network,
        ManifestField::OwnedBy,
    ]
    .into_iter()
    .try_fold(document, |node, field| {
        node.get(field.as_str())
            .filter(|child| !child.is_null())
            .ok_or(field)
    })
}

/// Decodes a contents API body into UTF-8 text.
pub(crate) fn decode_content(content: &FileContent) -> Result<String, String> {
    match content.encoding.as_deref() {
        None | Some("base64") => {}
        Some(other) => return Err(format!("unsupported content encoding `{other}`")),
    }

    let compact: String = content
        .content
        .chars()
        .filter(|ch| !ch.is_ascii_whitespace())
        .collect();
    let bytes = STANDARD
        .decode(compact)
        .map_err(|error| format!("invalid base64: {error}"))?;

    String::from_utf8(bytes).map_err(|error| format!("invalid UTF-8: {error}"))
}
