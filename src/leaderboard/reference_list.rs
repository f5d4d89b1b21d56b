//! Static list of repository references for leaderboard runs.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::github::ResolutionError;

/// Ordered repository URLs, loaded once and never mutated.
///
/// The file format is a JSON array of strings:
///
/// ```json
/// ["https://github.com/potlock/core", "https://github.com/near/nearcore"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceList(Vec<String>);

impl ReferenceList {
    /// Parses a JSON array of repository URLs.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::Configuration`] when the text is not a JSON
    /// array of strings.
    pub fn from_json(text: &str) -> Result<Self, ResolutionError> {
        serde_json::from_str::<Vec<String>>(text)
            .map(Self)
            .map_err(|error| ResolutionError::Configuration {
                message: format!("repository list must be a JSON array of URLs: {error}"),
            })
    }

    /// Reads and parses the list at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::Io`] when the file cannot be read and
    /// [`ResolutionError::Configuration`] when it is not a JSON array of
    /// strings.
    pub fn load(path: &Utf8Path) -> Result<Self, ResolutionError> {
        let parent = path
            .parent()
            .filter(|dir| !dir.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let file_name = path.file_name().ok_or_else(|| ResolutionError::Io {
            message: format!("invalid repository list path '{path}': no file name"),
        })?;

        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| {
            ResolutionError::Io {
                message: format!("failed to open directory '{parent}': {error}"),
            }
        })?;
        let text = dir
            .read_to_string(file_name)
            .map_err(|error| ResolutionError::Io {
                message: format!("failed to read repository list '{path}': {error}"),
            })?;

        Self::from_json(&text)
    }

    /// References in file order.
    #[must_use]
    pub fn references(&self) -> &[String] {
        &self.0
    }

    /// Number of references.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for ReferenceList {
    fn from(references: Vec<String>) -> Self {
        Self(references)
    }
}
