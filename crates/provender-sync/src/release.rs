//! GitHub release metadata client

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, SyncError};

/// Default base URL of the release API
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// User agent sent with every request (the API rejects anonymous agents)
pub(crate) const USER_AGENT: &str = concat!("provender/", env!("CARGO_PKG_VERSION"));

/// A single release as returned by the release-by-tag endpoint.
///
/// Unknown JSON fields are ignored so newer API revisions keep decoding.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Canonical API URL of this release
    pub url: String,

    /// Free-text release notes (may be absent or null)
    #[serde(default)]
    pub body: Option<String>,

    /// Declared release assets, in API order
    pub assets: Vec<ReleaseAsset>,
}

/// A downloadable artifact declared by a release
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    /// Asset file name, unique within the release
    pub name: String,

    /// Declared size in bytes
    pub size: u64,

    /// Download URL
    pub browser_download_url: String,
}

impl Release {
    /// Names of all declared assets
    pub fn asset_names(&self) -> Vec<String> {
        self.assets.iter().map(|asset| asset.name.clone()).collect()
    }

    /// Release notes text, empty when the release has none
    pub fn notes(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

/// Client for fetching a single release's metadata
pub struct ReleaseClient {
    client: reqwest::Client,
    api_url: String,
}

impl ReleaseClient {
    /// Create a client against the given API base URL
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(SyncError::client)?;

        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    /// Fetch a release by repository slug (`owner/repo`) and tag.
    ///
    /// One unauthenticated GET; any non-200 response is a hard failure and
    /// its body is discarded.
    pub async fn fetch_release(&self, slug: &str, tag: &str) -> Result<Release> {
        let url = format!("{}/repos/{}/releases/tags/{}", self.api_url, slug, tag);

        debug!("Fetching release metadata from: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| SyncError::network(&url, source))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(SyncError::UnexpectedStatus { url, status });
        }

        let body = response
            .text()
            .await
            .map_err(|source| SyncError::network(&url, source))?;

        let release: Release =
            serde_json::from_str(&body).map_err(|source| SyncError::Decode { url, source })?;

        Ok(release)
    }
}
