//! Asset download and validation

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use futures_util::StreamExt;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{Result, SyncError};
use crate::release::{ReleaseAsset, USER_AGENT};

/// Chunk size for checksum calculation (1MB)
const HASH_CHUNK_SIZE: usize = 1024 * 1024;

/// Downloads release assets into a staging directory and validates them.
///
/// Assets are processed one at a time: fully downloaded, size-checked, and
/// (when enabled) checksum-verified before the next asset starts. Any
/// failure aborts the remaining assets.
pub struct AssetFetcher {
    client: reqwest::Client,
    verify_checksums: bool,
}

impl AssetFetcher {
    /// Create a fetcher; `verify_checksums` gates step 3 of validation
    pub fn new(verify_checksums: bool) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(SyncError::client)?;

        Ok(Self {
            client,
            verify_checksums,
        })
    }

    /// Download one asset into `staging_dir` and validate it.
    ///
    /// The file is named after the asset. With checksum validation enabled,
    /// an asset absent from the checksum map is a hard failure.
    pub async fn fetch(
        &self,
        asset: &ReleaseAsset,
        staging_dir: &Path,
        checksums: &HashMap<String, String>,
    ) -> Result<()> {
        let path = staging_dir.join(&asset.name);

        self.download(asset, &path).await?;
        check_size(&path, asset)?;

        if self.verify_checksums {
            let expected = checksums
                .get(&asset.name)
                .ok_or_else(|| SyncError::ChecksumMissing {
                    asset: asset.name.clone(),
                })?;
            check_checksum(&path, expected, &asset.name)?;
        }

        Ok(())
    }

    /// Stream the asset's download URL to a staging file
    async fn download(&self, asset: &ReleaseAsset, path: &Path) -> Result<()> {
        let url = &asset.browser_download_url;

        debug!("Downloading asset '{}' from {}", asset.name, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| SyncError::download(&asset.name, url, source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::DownloadStatus {
                asset: asset.name.clone(),
                url: url.clone(),
                status,
            });
        }

        let mut file =
            File::create(path).map_err(|source| SyncError::filesystem("Creating", path, source))?;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk: bytes::Bytes =
                chunk.map_err(|source| SyncError::download(&asset.name, url, source))?;
            file.write_all(&chunk)
                .map_err(|source| SyncError::filesystem("Writing", path, source))?;
        }

        Ok(())
    }
}

/// Compare downloaded byte count against the declared asset size
fn check_size(path: &Path, asset: &ReleaseAsset) -> Result<()> {
    let metadata =
        fs::metadata(path).map_err(|source| SyncError::filesystem("Inspecting", path, source))?;

    let actual = metadata.len();
    if actual != asset.size {
        return Err(SyncError::SizeMismatch {
            asset: asset.name.clone(),
            expected: asset.size,
            actual,
        });
    }

    Ok(())
}

/// Compare the file's SHA-256 digest against the expected hex string,
/// case-insensitively
fn check_checksum(path: &Path, expected: &str, asset: &str) -> Result<()> {
    let actual = file_sha256(path)?;

    if !actual.eq_ignore_ascii_case(expected) {
        return Err(SyncError::ChecksumMismatch {
            asset: asset.to_string(),
            expected: expected.to_string(),
            actual,
        });
    }

    Ok(())
}

/// SHA-256 of a file's contents as lowercase hex
fn file_sha256(path: &Path) -> Result<String> {
    let mut file =
        File::open(path).map_err(|source| SyncError::filesystem("Opening", path, source))?;

    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; HASH_CHUNK_SIZE];

    loop {
        let bytes_read = file
            .read(&mut buffer)
            .map_err(|source| SyncError::filesystem("Reading", path, source))?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
