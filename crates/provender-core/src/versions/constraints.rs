//! Constraint expression parsing and matching
//!
//! A constraint expression is a comma-separated list of comparator+version
//! terms, e.g. `>=v1.0.0, <v2.0.0`. The expression matches a version only if
//! every term matches (logical AND). Supported comparators: `=`, `>`, `>=`,
//! `<`, `<=`; a bare version term is shorthand for `=`.

use std::cmp::Ordering;

use semver::Version;

use crate::error::{Error, Result};

use super::relaxed::RelaxedSemver;

/// Comparison operator of a single constraint term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Eq,
    Gt,
    Ge,
    Lt,
    Le,
}

/// A single comparator+version term
#[derive(Debug, Clone)]
pub struct Constraint {
    op: Comparator,
    operand: Version,
}

impl Constraint {
    /// Parse a single term such as `>=1.2.0` or `v1.0.0`
    pub fn parse(term: &str) -> Result<Self> {
        let term = term.trim();
        if term.is_empty() {
            return Err(Error::invalid_constraint(term, "empty term"));
        }

        let (op, rest) = if let Some(rest) = term.strip_prefix(">=") {
            (Comparator::Ge, rest)
        } else if let Some(rest) = term.strip_prefix("<=") {
            (Comparator::Le, rest)
        } else if let Some(rest) = term.strip_prefix('>') {
            (Comparator::Gt, rest)
        } else if let Some(rest) = term.strip_prefix('<') {
            (Comparator::Lt, rest)
        } else if let Some(rest) = term.strip_prefix('=') {
            (Comparator::Eq, rest)
        } else {
            (Comparator::Eq, term)
        };

        let operand = RelaxedSemver::parse(rest.trim())
            .version()
            .cloned()
            .ok_or_else(|| Error::invalid_constraint(term, "unparseable version operand"))?;

        Ok(Self { op, operand })
    }

    /// Whether a parsed version satisfies this term
    pub fn matches(&self, version: &Version) -> bool {
        // Precedence comparison, so build metadata never influences matching
        let ord = version.cmp_precedence(&self.operand);
        match self.op {
            Comparator::Eq => ord == Ordering::Equal,
            Comparator::Gt => ord == Ordering::Greater,
            Comparator::Ge => ord != Ordering::Less,
            Comparator::Lt => ord == Ordering::Less,
            Comparator::Le => ord != Ordering::Greater,
        }
    }
}

/// The logical AND of the terms in one comma-separated expression
#[derive(Debug, Clone)]
pub struct ConstraintSet {
    terms: Vec<Constraint>,
}

impl ConstraintSet {
    /// Parse a comma-separated constraint expression.
    ///
    /// Fails on the first malformed term; an expression with no terms at all
    /// (empty input) is malformed too.
    pub fn parse(expr: &str) -> Result<Self> {
        let terms = expr
            .split(',')
            .map(Constraint::parse)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { terms })
    }

    /// Whether a version satisfies every term.
    ///
    /// Unorderable versions never satisfy a constraint.
    pub fn matches(&self, version: &RelaxedSemver) -> bool {
        match version.version() {
            Some(parsed) => self.terms.iter().all(|term| term.matches(parsed)),
            None => false,
        }
    }
}
