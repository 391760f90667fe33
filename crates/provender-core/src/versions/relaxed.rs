//! Relaxed semantic version parsing and comparison

use std::cmp::Ordering;
use std::fmt;

use semver::{Prerelease, Version};

/// A version string parsed permissively.
///
/// Parsing never fails: a leading `v` or `V` is stripped before handing the
/// rest to [`semver::Version::parse`], and input that still fails to parse is
/// kept with its raw string but flagged as unorderable. Unorderable versions
/// sort before orderable ones and are excluded from highest-version lookup.
#[derive(Debug, Clone)]
pub struct RelaxedSemver {
    raw: String,
    parsed: Option<Version>,
}

impl RelaxedSemver {
    /// Parse a raw version string, tolerating malformed input
    pub fn parse(raw: &str) -> Self {
        let candidate = raw.trim();
        let stripped = candidate
            .strip_prefix('v')
            .or_else(|| candidate.strip_prefix('V'))
            .unwrap_or(candidate);

        Self {
            raw: raw.to_string(),
            parsed: Version::parse(stripped).ok(),
        }
    }

    /// The original input string
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The parsed version, if the input was valid
    pub fn version(&self) -> Option<&Version> {
        self.parsed.as_ref()
    }

    /// Whether this version participates in semantic ordering
    pub fn is_orderable(&self) -> bool {
        self.parsed.is_some()
    }

    /// The prerelease component, if present.
    ///
    /// Returns `None` for stable versions and for unorderable input.
    pub fn prerelease(&self) -> Option<&Prerelease> {
        self.parsed.as_ref().map(|v| &v.pre).filter(|p| !p.is_empty())
    }

    /// Total precedence ordering suitable for a stable sort.
    ///
    /// Orderable versions compare per SemVer precedence with build metadata
    /// ignored. Unorderable versions compare equal to each other and less
    /// than any orderable version, so a stable sort keeps them in input
    /// order at the front.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        match (&self.parsed, &other.parsed) {
            (Some(a), Some(b)) => a.cmp_precedence(b),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialEq for RelaxedSemver {
    fn eq(&self, other: &Self) -> bool {
        match (&self.parsed, &other.parsed) {
            // Build metadata does not affect equality
            (Some(a), Some(b)) => a.cmp_precedence(b) == Ordering::Equal,
            _ => self.raw == other.raw,
        }
    }
}

impl Eq for RelaxedSemver {}

impl fmt::Display for RelaxedSemver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
