//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::warn;

/// Warn when the static admin assets directory is missing; the server
/// still starts, static requests just 404.
pub async fn ensure_env(admin_assets_dir: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(admin_assets_dir).await.is_err() {
        warn!(%admin_assets_dir, "admin assets directory not found; static assets may 404");
    }
    Ok(())
}
