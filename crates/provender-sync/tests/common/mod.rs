//! Common test infrastructure for provender-sync integration tests
//!
//! Provides mock release endpoints, asset mounting helpers, and checksum
//! fixtures shared across test files.

#![allow(dead_code)]

use serde_json::{json, Value};
use sha2::{Digest, Sha256};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// SHA-256 of a byte slice as lowercase hex
pub fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

/// Render a `+++`-delimited checksum block for the given (name, content)
/// pairs, as a release body would carry it
pub fn checksum_block(entries: &[(&str, &[u8])]) -> String {
    let mut block = String::from("+++\n");
    for (name, content) in entries {
        block.push_str(&format!("{}  {}\n", sha256_hex(content), name));
    }
    block.push_str("+++\n");
    block
}

/// Build a release JSON document whose assets download from the mock server
pub fn release_json(server_uri: &str, assets: &[(&str, &[u8])], body: &str) -> Value {
    let asset_values: Vec<Value> = assets
        .iter()
        .map(|(name, content)| {
            json!({
                "name": name,
                "size": content.len(),
                "browser_download_url": format!("{}/assets/{}", server_uri, name),
            })
        })
        .collect();

    json!({
        "url": format!("{}/repos/acme/widgets/releases/1", server_uri),
        "tag_name": "v1.0.0",
        "draft": false,
        "body": body,
        "assets": asset_values,
    })
}

/// Mount the release-by-tag metadata endpoint
pub async fn mount_release(server: &MockServer, slug: &str, tag: &str, release: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{}/releases/tags/{}", slug, tag)))
        .respond_with(ResponseTemplate::new(200).set_body_json(release))
        .mount(server)
        .await;
}

/// Mount a download endpoint for one asset
pub async fn mount_asset(server: &MockServer, name: &str, content: &[u8]) {
    Mock::given(method("GET"))
        .and(path(format!("/assets/{}", name)))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(content))
        .mount(server)
        .await;
}

/// Mount a download endpoint that always fails with 500
pub async fn mount_failing_asset(server: &MockServer, name: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/assets/{}", name)))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
}
