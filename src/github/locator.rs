//! Repository URL parsing and identity wrappers.
//!
//! [`resolve`] turns a user-supplied reference into a [`RepositoryIdentity`]
//! without touching the network, so malformed input is rejected before any
//! request is made.

use std::fmt;

use url::Url;

use super::error::ResolutionError;

const GITHUB_HOSTS: [&str; 2] = ["github.com", "www.github.com"];

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, ResolutionError> {
        if value.is_empty() {
            return Err(missing_segments());
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, ResolutionError> {
        if value.is_empty() {
            return Err(missing_segments());
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Trims the token and rejects blank values.
    ///
    /// Returns `None` for blank input; requests then go out unauthenticated.
    #[must_use]
    pub fn new(token: impl AsRef<str>) -> Option<Self> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Stable `(owner, name)` identity of a GitHub repository.
///
/// Segments are passed through exactly as they appeared in the reference;
/// GitHub decides how to treat case.
///
/// # Example
///
/// ```
/// use fundscout::github::RepositoryIdentity;
///
/// let identity = RepositoryIdentity::new("potlock", "core")
///     .expect("owner and name are non-empty");
/// assert_eq!(identity.to_string(), "potlock/core");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryIdentity {
    owner: RepositoryOwner,
    name: RepositoryName,
}

impl RepositoryIdentity {
    /// Builds an identity from owner and repository name strings.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::InvalidUrl`] when either part is empty.
    pub fn new(owner: &str, name: &str) -> Result<Self, ResolutionError> {
        Ok(Self {
            owner: RepositoryOwner::new(owner)?,
            name: RepositoryName::new(name)?,
        })
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn name(&self) -> &RepositoryName {
        &self.name
    }

    /// Canonical browser URL for the repository.
    #[must_use]
    pub fn html_url(&self) -> String {
        format!(
            "https://github.com/{}/{}",
            self.owner.as_str(),
            self.name.as_str()
        )
    }

    pub(crate) fn repository_path(&self) -> String {
        format!("/repos/{}/{}", self.owner.as_str(), self.name.as_str())
    }

    pub(crate) fn contents_path(&self, file: &str) -> String {
        format!("{}/contents/{file}", self.repository_path())
    }

    pub(crate) fn commits_path(&self) -> String {
        format!("{}/commits", self.repository_path())
    }

    pub(crate) fn readme_path(&self) -> String {
        format!("{}/readme", self.repository_path())
    }
}

impl fmt::Display for RepositoryIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner.as_str(), self.name.as_str())
    }
}

/// Parses a GitHub repository URL of the form
/// `https://[www.]github.com/<owner>/<name>[/...]`.
///
/// Only the first two path segments are used; anything after them (a
/// trailing slash, `/tree/main`, ...) is ignored. No network access happens
/// here.
///
/// # Errors
///
/// Returns [`ResolutionError::InvalidUrl`] when the input is not an absolute
/// `http`/`https` URL or lacks an owner and name, and
/// [`ResolutionError::UnsupportedHost`] when the host is not `github.com`.
///
/// # Example
///
/// ```
/// use fundscout::github::resolve;
///
/// let identity = resolve("https://www.github.com/potlock/core/")
///     .expect("reference should resolve");
/// assert_eq!(identity.owner().as_str(), "potlock");
/// assert_eq!(identity.name().as_str(), "core");
/// ```
pub fn resolve(reference: &str) -> Result<RepositoryIdentity, ResolutionError> {
    let parsed = Url::parse(reference.trim())
        .map_err(|error| ResolutionError::InvalidUrl(error.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ResolutionError::InvalidUrl(format!(
            "unsupported scheme `{}`",
            parsed.scheme()
        )));
    }

    let host = parsed
        .host_str()
        .ok_or_else(|| ResolutionError::InvalidUrl("URL must include a host".to_owned()))?;

    if !GITHUB_HOSTS.contains(&host) {
        return Err(ResolutionError::UnsupportedHost {
            host: host.to_owned(),
        });
    }

    let mut segments = parsed.path_segments().ok_or_else(missing_segments)?;
    let owner = segments.next().ok_or_else(missing_segments)?;
    let name = segments.next().ok_or_else(missing_segments)?;

    RepositoryIdentity::new(owner, name)
}

fn missing_segments() -> ResolutionError {
    ResolutionError::InvalidUrl("URL path must be /<owner>/<repository>".to_owned())
}
