//! Funding manifest validation.
//!
//! Fetches `FUNDING.json` through a [`crate::github::RepositoryGateway`],
//! decodes it, and classifies it as a [`ManifestOutcome`]. Also hosts the
//! NEAR account rules and the proposal-link builder that depend on the same
//! manifest shape.

pub mod account;
pub mod check;
pub mod manifest;
pub mod proposal;
pub mod validator;

pub use account::{AccountId, is_valid_account};
pub use check::{FundingCheck, FundingReport};
pub use manifest::{
    FUNDING_FILE, FundingManifest, ManifestField, ManifestOutcome, inspect_content,
    inspect_manifest,
};
pub use proposal::proposal_url;
pub use validator::ManifestValidator;
