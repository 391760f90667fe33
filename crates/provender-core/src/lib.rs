//! # provender-core
//!
//! Core library for the Provender CLI providing:
//! - Relaxed semantic version parsing (never fails, tolerates a `v` prefix)
//! - Ordered version sets with deterministic sorting and highest-version lookup
//! - Constraint expression parsing and filtering (comma-separated AND terms)
//! - Prerelease inclusion/exclusion selection

pub mod error;
pub mod versions;

pub use error::{Error, Result};
pub use versions::{ConstraintSet, PrereleaseSelection, RelaxedSemver, VersionSet};
