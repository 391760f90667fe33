//! Atomic promotion of a staging directory to its destination

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SyncError};

/// Replace `dst` with `staging` in two steps: recursive removal of the
/// existing destination, then a single rename.
///
/// The rename is atomic within one filesystem, so `dst` is never observed
/// half-written. A missing destination is not an error. Callers must have
/// validated every staged file before invoking this.
pub fn publish(staging: &Path, dst: &Path) -> Result<()> {
    debug!(
        "Publishing staging dir {} to {}",
        staging.display(),
        dst.display()
    );

    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)
            .map_err(|source| SyncError::filesystem("Creating", parent, source))?;
    }

    match fs::remove_dir_all(dst) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => return Err(SyncError::filesystem("Removing", dst, source)),
    }

    fs::rename(staging, dst).map_err(|source| SyncError::filesystem("Renaming", staging, source))
}
