//! Version selection primitives
//!
//! The resolver pipeline is a pure sequence of transformations over a
//! [`VersionSet`]: parse raw strings, sort, filter by constraints, filter by
//! prerelease selection, then look up the highest remaining version.

mod constraints;
mod prereleases;
mod relaxed;
mod set;

pub use constraints::{Comparator, Constraint, ConstraintSet};
pub use prereleases::PrereleaseSelection;
pub use relaxed::RelaxedSemver;
pub use set::VersionSet;
