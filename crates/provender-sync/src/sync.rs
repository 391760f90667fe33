//! Sync orchestration: metadata fetch, checksum extraction, asset
//! validation, atomic publish

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::TempDir;
use tracing::{debug, info};

use crate::checksums;
use crate::download::AssetFetcher;
use crate::error::{Result, SyncError};
use crate::publish;
use crate::release::{ReleaseClient, GITHUB_API_URL};

/// Name of the working subdirectory inside the staging temp dir
const STAGING_SUBDIR: &str = "github-release";

/// Options for one sync invocation
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Repository slug, `owner/repo`
    pub slug: String,

    /// Release tag to sync
    pub tag: String,

    /// Base URL of the release API
    pub api_url: String,

    /// Validate asset checksums against the release notes (default on)
    pub verify_checksums: bool,

    /// Root directory for the private staging directory; system temp when
    /// unset
    pub staging_root: Option<PathBuf>,
}

impl SyncOptions {
    /// Options for a release with checksum validation enabled
    pub fn new(slug: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            tag: tag.into(),
            api_url: GITHUB_API_URL.to_string(),
            verify_checksums: true,
            staging_root: None,
        }
    }

    /// Override the release API base URL
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Enable or disable checksum validation
    pub fn with_checksum_validation(mut self, verify: bool) -> Self {
        self.verify_checksums = verify;
        self
    }

    /// Root the staging directory at a specific path
    pub fn with_staging_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.staging_root = Some(root.into());
        self
    }
}

/// Minimal persisted reference enabling a future sync to reproduce the same
/// content. Persistence is the caller's concern.
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseLock {
    /// Canonical API URL of the synced release
    pub url: String,
}

/// One-shot synchronization of a release into a destination directory.
///
/// The destination is either fully replaced by a verified snapshot or left
/// untouched; partial state is confined to a staging directory private to
/// this invocation. Concurrent syncs to the same destination must be
/// serialized by the caller.
pub struct GithubReleaseSync {
    options: SyncOptions,
    client: ReleaseClient,
    fetcher: AssetFetcher,
}

impl GithubReleaseSync {
    /// Create a sync operation from options
    pub fn new(options: SyncOptions) -> Result<Self> {
        let client = ReleaseClient::new(&options.api_url)?;
        let fetcher = AssetFetcher::new(options.verify_checksums)?;

        Ok(Self {
            options,
            client,
            fetcher,
        })
    }

    /// Run the pipeline and publish into `dst`.
    ///
    /// Assets are downloaded and validated sequentially; the first failure
    /// aborts the rest. The staging directory is removed on every exit path
    /// (cleanup is best-effort and never escalated).
    pub async fn sync(&self, dst: &Path) -> Result<ReleaseLock> {
        let staging = self.create_staging()?;
        let staging_dir = staging.path().join(STAGING_SUBDIR);
        fs::create_dir_all(&staging_dir)
            .map_err(|source| SyncError::filesystem("Creating", &staging_dir, source))?;

        let release = self
            .client
            .fetch_release(&self.options.slug, &self.options.tag)
            .await?;

        info!(
            "Fetched release {}@{} with {} asset(s)",
            self.options.slug,
            self.options.tag,
            release.assets.len()
        );

        let file_checksums = if self.options.verify_checksums {
            checksums::find(&release.asset_names(), release.notes())?
        } else {
            HashMap::new()
        };

        for asset in &release.assets {
            self.fetcher
                .fetch(asset, &staging_dir, &file_checksums)
                .await?;
            debug!("Validated asset '{}'", asset.name);
        }

        publish::publish(&staging_dir, dst)?;

        info!(
            "Published {} asset(s) to {}",
            release.assets.len(),
            dst.display()
        );

        Ok(ReleaseLock { url: release.url })
    }

    /// Acquire the staging temp dir, rooted at the configured staging root
    /// when one is set
    fn create_staging(&self) -> Result<TempDir> {
        match &self.options.staging_root {
            Some(root) => {
                fs::create_dir_all(root)
                    .map_err(|source| SyncError::filesystem("Creating", root, source))?;
                TempDir::new_in(root)
                    .map_err(|source| SyncError::filesystem("Creating staging in", root, source))
            }
            None => TempDir::new().map_err(|source| {
                SyncError::filesystem("Creating staging in", std::env::temp_dir(), source)
            }),
        }
    }
}
