//! Ordered collections of relaxed versions

use crate::error::Result;

use super::constraints::ConstraintSet;
use super::prereleases::PrereleaseSelection;
use super::relaxed::RelaxedSemver;

/// An ordered sequence of parsed versions.
///
/// Every operation returns a new set; nothing filters in place. Duplicate
/// raw strings are preserved.
#[derive(Debug, Clone, Default)]
pub struct VersionSet {
    versions: Vec<RelaxedSemver>,
}

impl VersionSet {
    /// Parse a list of input strings into a set.
    ///
    /// Each input is split on whitespace first, so one argument may carry
    /// several version tokens.
    pub fn parse(inputs: &[String]) -> Self {
        let versions = inputs
            .iter()
            .flat_map(|input| input.split_whitespace())
            .map(RelaxedSemver::parse)
            .collect();

        Self { versions }
    }

    /// Sort ascending by semantic precedence.
    ///
    /// The sort is stable, so ties (and unorderable entries) keep their
    /// original relative order. Sorting an already-sorted set is a no-op.
    pub fn sorted(&self) -> Self {
        let mut versions = self.versions.clone();
        versions.sort_by(RelaxedSemver::cmp_precedence);
        Self { versions }
    }

    /// Keep only versions satisfying every term of the constraint expression
    pub fn filter_constraints(&self, expr: &str) -> Result<Self> {
        let constraints = ConstraintSet::parse(expr)?;

        let versions = self
            .versions
            .iter()
            .filter(|ver| constraints.matches(ver))
            .cloned()
            .collect();

        Ok(Self { versions })
    }

    /// Apply a prerelease selection.
    ///
    /// `None` drops every version carrying a prerelease component; stable
    /// versions always pass.
    pub fn filter_prereleases(&self, selection: Option<&PrereleaseSelection>) -> Self {
        let versions = self
            .versions
            .iter()
            .filter(|ver| match ver.prerelease() {
                None => true,
                Some(pre) => selection.is_some_and(|sel| sel.matches(pre)),
            })
            .cloned()
            .collect();

        Self { versions }
    }

    /// The highest orderable version of the current set.
    ///
    /// Unorderable entries are skipped; `None` when nothing orderable
    /// remains.
    pub fn highest(&self) -> Option<String> {
        self.versions
            .iter()
            .filter(|ver| ver.is_orderable())
            .max_by(|a, b| a.cmp_precedence(b))
            .map(|ver| ver.raw().to_string())
    }

    /// Raw version strings in the set's current order
    pub fn all(&self) -> Vec<String> {
        self.versions.iter().map(|ver| ver.raw().to_string()).collect()
    }

    /// Number of versions in the set
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(inputs: &[&str]) -> VersionSet {
        VersionSet::parse(&inputs.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_sorted_ascending() {
        let sorted = set(&["v1.2.0", "v1.0.0", "v1.1.0"]).sorted();
        assert_eq!(sorted.all(), vec!["v1.0.0", "v1.1.0", "v1.2.0"]);
    }

    #[test]
    fn test_sorted_is_idempotent() {
        let once = set(&["2.0.0", "0.1.0", "1.0.0-rc.1", "1.0.0"]).sorted();
        let twice = once.sorted();
        assert_eq!(once.all(), twice.all());
    }

    #[test]
    fn test_highest_equals_last_of_sorted() {
        let versions = set(&["0.5.0", "2.1.0", "1.9.3"]);
        let sorted = versions.sorted();
        assert_eq!(versions.highest(), sorted.all().last().cloned());
    }

    #[test]
    fn test_highest_on_empty_set() {
        assert_eq!(set(&[]).highest(), None);
    }

    #[test]
    fn test_highest_skips_unorderable() {
        let versions = set(&["garbage", "1.0.0"]);
        assert_eq!(versions.highest(), Some("1.0.0".to_string()));

        let all_invalid = set(&["garbage", "more-garbage"]);
        assert_eq!(all_invalid.highest(), None);
    }

    #[test]
    fn test_unorderable_kept_in_set() {
        let versions = set(&["garbage", "1.0.0"]);
        assert_eq!(versions.len(), 2);
        assert!(versions.all().contains(&"garbage".to_string()));
    }

    #[test]
    fn test_whitespace_tokens_split() {
        let versions = VersionSet::parse(&["1.0.0 2.0.0".to_string(), "3.0.0".to_string()]);
        assert_eq!(versions.len(), 3);
    }

    #[test]
    fn test_duplicates_preserved() {
        let versions = set(&["1.0.0", "1.0.0"]);
        assert_eq!(versions.all(), vec!["1.0.0", "1.0.0"]);
    }

    #[test]
    fn test_filter_constraints_returns_satisfying_subset() {
        let versions = set(&["0.9.0", "1.0.0", "1.5.0", "2.0.0"]);
        let filtered = versions.filter_constraints(">=1.0.0, <2.0.0").unwrap();
        assert_eq!(filtered.all(), vec!["1.0.0", "1.5.0"]);
        // the source set is untouched
        assert_eq!(versions.len(), 4);
    }

    #[test]
    fn test_filter_constraints_malformed_expression() {
        let versions = set(&["1.0.0"]);
        assert!(versions.filter_constraints(">=oops").is_err());
    }

    #[test]
    fn test_default_prerelease_filter_drops_all_prereleases() {
        let versions = set(&["1.0.0", "1.1.0-beta.1", "2.0.0-rc.1", "2.0.0"]);
        let filtered = versions.filter_prereleases(None);
        assert_eq!(filtered.all(), vec!["1.0.0", "2.0.0"]);
    }

    #[test]
    fn test_prerelease_filter_with_empty_identifiers_keeps_all() {
        let versions = set(&["1.0.0", "1.1.0-beta.1", "2.0.0-rc.1"]);
        let filtered = versions.filter_prereleases(Some(&PrereleaseSelection::all()));
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_prerelease_filter_with_identifiers() {
        let versions = set(&["1.0.0", "1.1.0-beta.1", "2.0.0-rc.1"]);
        let selection = PrereleaseSelection::with_identifiers(vec!["rc".to_string()]);
        let filtered = versions.filter_prereleases(Some(&selection));
        assert_eq!(filtered.all(), vec!["1.0.0", "2.0.0-rc.1"]);
    }

    #[test]
    fn test_stable_only_selection_pipeline() {
        let versions = set(&["v1.2.0", "v1.0.0", "v1.1.0-beta"]);
        let result = versions.sorted().filter_prereleases(None);
        assert_eq!(result.all(), vec!["v1.0.0", "v1.2.0"]);
        assert_eq!(result.highest(), Some("v1.2.0".to_string()));
    }
}
