//! Error types for the release acquisition pipeline

use std::path::{Path, PathBuf};

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias using provender-sync's error type
pub type Result<T> = std::result::Result<T, SyncError>;

/// Failures of one sync invocation.
///
/// Every variant carries enough context (asset name, URL, expected vs.
/// actual values) to diagnose without retrying; the pipeline performs no
/// automatic retries.
#[derive(Error, Debug)]
pub enum SyncError {
    /// HTTP client construction failed
    #[error("Building HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    /// Transport-level failure while talking to the release API
    #[error("Fetching release metadata from {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The release API answered with something other than 200
    #[error("Unexpected response status {status} from {url}")]
    UnexpectedStatus { url: String, status: StatusCode },

    /// The release API response body was not the expected JSON shape
    #[error("Decoding release metadata from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Structurally invalid checksum block in the release notes
    #[error("Parsing release notes checksums: {reason}")]
    NotesParse { reason: String },

    /// Transport-level failure while downloading an asset
    #[error("Downloading asset '{asset}' from {url}: {source}")]
    Download {
        asset: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success status while downloading an asset
    #[error("Downloading asset '{asset}' from {url}: unexpected status {status}")]
    DownloadStatus {
        asset: String,
        url: String,
        status: StatusCode,
    },

    /// Downloaded byte count does not match the declared asset size
    #[error("Asset '{asset}' size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        asset: String,
        expected: u64,
        actual: u64,
    },

    /// Downloaded bytes hash to something other than the declared digest
    #[error("Asset '{asset}' checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch {
        asset: String,
        expected: String,
        actual: String,
    },

    /// Checksum validation is enabled but the release notes declare no
    /// checksum for this asset
    #[error("No checksum for asset '{asset}' in release notes")]
    ChecksumMissing { asset: String },

    /// Filesystem operation failed (create/remove/rename)
    #[error("{op} '{}': {source}", .path.display())]
    Filesystem {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SyncError {
    /// Create a client construction error
    pub fn client(source: reqwest::Error) -> Self {
        Self::Client { source }
    }

    /// Create a metadata transport error
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Create a release notes parse error
    pub fn notes_parse(reason: impl Into<String>) -> Self {
        Self::NotesParse {
            reason: reason.into(),
        }
    }

    /// Create an asset download transport error
    pub fn download(asset: impl Into<String>, url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Download {
            asset: asset.into(),
            url: url.into(),
            source,
        }
    }

    /// Create a filesystem error with operation context
    pub fn filesystem(op: &'static str, path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Filesystem {
            op,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
