//! Prerelease inclusion selection

use semver::Prerelease;
use serde::{Deserialize, Serialize};

/// Which prerelease versions to keep when filtering a version set.
///
/// The selection is applied only to versions that carry a prerelease
/// component; stable versions always pass. An empty identifier list keeps
/// every prerelease, a non-empty list keeps only prereleases where at least
/// one non-numeric dot-separated segment matches a listed identifier (so
/// `beta` matches `1.0.0-beta.1` but not `1.0.0-alpha.1`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrereleaseSelection {
    /// Prerelease identifiers to include; empty means all
    #[serde(default)]
    pub identifiers: Vec<String>,
}

impl PrereleaseSelection {
    /// Keep every prerelease version
    pub fn all() -> Self {
        Self::default()
    }

    /// Keep only prereleases matching one of the given identifiers
    pub fn with_identifiers(identifiers: Vec<String>) -> Self {
        Self { identifiers }
    }

    /// Whether a prerelease component passes this selection
    pub fn matches(&self, prerelease: &Prerelease) -> bool {
        if self.identifiers.is_empty() {
            return true;
        }

        prerelease
            .as_str()
            .split('.')
            .filter(|segment| segment.parse::<u64>().is_err())
            .any(|segment| self.identifiers.iter().any(|id| id == segment))
    }
}
