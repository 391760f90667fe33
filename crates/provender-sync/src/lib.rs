//! Release acquisition pipeline for Provender
//!
//! Provides:
//! - Release metadata fetching from the GitHub release-by-tag endpoint
//! - Checksum extraction from release-note text
//! - Sequential asset download with size and SHA-256 validation
//! - Atomic promotion of a private staging directory to the destination
//!
//! The pipeline either fully replaces the destination directory with a
//! verified snapshot or leaves it untouched. Partial state is confined to
//! the staging directory, which is cleaned up on both success and failure.

pub mod checksums;
pub mod download;
pub mod error;
pub mod publish;
pub mod release;
pub mod sync;

pub use download::AssetFetcher;
pub use error::{Result, SyncError};
pub use release::{Release, ReleaseAsset, ReleaseClient, GITHUB_API_URL};
pub use sync::{GithubReleaseSync, ReleaseLock, SyncOptions};
