//! Checksum extraction from release-note text
//!
//! Release notes conventionally embed a block of SHA-256 digests delimited
//! by marker lines consisting solely of `+++`:
//!
//! ```text
//! +++
//! 26bf09c4...83a1  release.yml
//! 26bf09c4...83a2  /with-slash.yml
//! +++
//! ```
//!
//! Only lines whose filename exactly matches a known asset name (after
//! trimming and stripping a leading `./` or `/`) produce entries; everything
//! else is ignored. Absence of a checksum for a given asset is detected
//! later during validation, not here.

use std::collections::{HashMap, HashSet};

use crate::error::{Result, SyncError};

const BLOCK_MARKER: &str = "+++";
const SHA256_HEX_LEN: usize = 64;

/// Scan release notes for per-asset SHA-256 digests.
///
/// Returns a map from asset name to lowercase hex digest, restricted to the
/// given asset names. Fails only on structurally invalid input (an opening
/// marker with no closing marker); zero matches is not an error.
pub fn find(asset_names: &[String], notes: &str) -> Result<HashMap<String, String>> {
    let known: HashSet<&str> = asset_names.iter().map(String::as_str).collect();

    let mut result = HashMap::new();
    let mut in_block = false;

    for line in notes.lines() {
        let line = line.trim();

        if line == BLOCK_MARKER {
            in_block = !in_block;
            continue;
        }
        if !in_block {
            continue;
        }

        let Some((digest, rest)) = line.split_once(char::is_whitespace) else {
            continue;
        };
        if digest.len() != SHA256_HEX_LEN || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
            continue;
        }

        let name = rest.trim();
        let name = name
            .strip_prefix("./")
            .or_else(|| name.strip_prefix('/'))
            .unwrap_or(name);

        if known.contains(name) {
            result.insert(name.to_string(), digest.to_ascii_lowercase());
        }
    }

    if in_block {
        return Err(SyncError::notes_parse("unterminated checksum block"));
    }

    Ok(result)
}
