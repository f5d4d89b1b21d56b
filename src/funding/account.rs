//! NEAR account identifier validation.
//!
//! An account is one or more lowercase alphanumeric segments joined by
//! `.`. Hyphens may appear inside a segment but never at its edges and never
//! twice in a row. The whole identifier is 2 to 64 bytes long.

use std::fmt;

use serde::Serialize;

use crate::github::ResolutionError;

const MIN_ACCOUNT_LEN: usize = 2;
const MAX_ACCOUNT_LEN: usize = 64;
const PROFILE_BASE_URL: &str = "https://alpha.potlock.org/profile";

/// Returns true when `value` is a well-formed NEAR account identifier.
///
/// # Example
///
/// ```
/// use fundscout::funding::is_valid_account;
///
/// assert!(is_valid_account("alice.near"));
/// assert!(is_valid_account("my-dao.sputnik-dao.near"));
/// assert!(!is_valid_account("-alice.near"));
/// assert!(!is_valid_account("a"));
/// ```
#[must_use]
pub fn is_valid_account(value: &str) -> bool {
    (MIN_ACCOUNT_LEN..=MAX_ACCOUNT_LEN).contains(&value.len())
        && value.split('.').all(is_valid_segment)
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && !segment.starts_with('-')
        && !segment.ends_with('-')
        && !segment.contains("--")
        && segment
            .bytes()
            .all(|byte| byte.is_ascii_lowercase() || byte.is_ascii_digit() || byte == b'-')
}

/// A validated NEAR account identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Validates `value` as an account identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::InvalidAccount`] when the value breaks the
    /// length or segment rules.
    pub fn parse(value: &str) -> Result<Self, ResolutionError> {
        if is_valid_account(value) {
            Ok(Self(value.to_owned()))
        } else {
            Err(ResolutionError::InvalidAccount {
                value: value.to_owned(),
            })
        }
    }

    /// Borrow the identifier.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Potlock profile page for the account.
    #[must_use]
    pub fn profile_url(&self) -> String {
        format!("{PROFILE_BASE_URL}/{}", self.0)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
