//! Release sync command

use anyhow::{Context, Result};
use provender_sync::{GithubReleaseSync, SyncOptions};

use crate::cli::SyncArgs;
use crate::output;

/// Run the sync command
pub async fn run(args: SyncArgs) -> Result<()> {
    let mut options = SyncOptions::new(args.slug.as_str(), args.tag.as_str())
        .with_api_url(args.api_url.as_str())
        .with_checksum_validation(!args.disable_checksum_validation);

    if let Some(root) = &args.staging_root {
        options = options.with_staging_root(root.as_std_path());
    }

    let lock = GithubReleaseSync::new(options)?
        .sync(args.dst.as_std_path())
        .await
        .with_context(|| format!("Syncing {}@{}", args.slug, args.tag))?;

    output::success(&format!(
        "Synced {}@{} to {}",
        args.slug, args.tag, args.dst
    ));
    output::kv("Lock URL", &lock.url);

    Ok(())
}
