//! Version selection command
//!
//! Parses the supplied version strings, sorts them, applies constraint and
//! prerelease filters, then prints the matching versions and the highest
//! one. Zero matches is not an error; the highest-version line is simply
//! omitted.

use anyhow::Result;
use provender_core::{PrereleaseSelection, VersionSet};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::VersionsArgs;

#[derive(Tabled)]
struct VersionRow {
    #[tabled(rename = "Version")]
    version: String,
}

/// Run the versions command
pub fn run(args: VersionsArgs) -> Result<()> {
    let mut versions = VersionSet::parse(&args.versions).sorted();

    if !args.constraints.is_empty() {
        let expr = args.constraints.join(", ");
        versions = versions.filter_constraints(&expr)?;
    }

    let selection = prerelease_selection(&args);
    let versions = versions.filter_prereleases(selection.as_ref());

    let rows: Vec<VersionRow> = versions
        .all()
        .into_iter()
        .map(|version| VersionRow { version })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::blank());
    println!("{}", table);

    if let Some(highest) = versions.highest() {
        println!("\nHighest version: {}", highest);
    }

    Ok(())
}

/// Map the prerelease flags to a selection; no flag at all means
/// stable-only
fn prerelease_selection(args: &VersionsArgs) -> Option<PrereleaseSelection> {
    if args.prerelease || !args.prerelease_identifiers.is_empty() {
        Some(PrereleaseSelection::with_identifiers(
            args.prerelease_identifiers.clone(),
        ))
    } else {
        None
    }
}
