//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected files and directories exist at startup.

use std::path::Path;

use tracing::warn;

/// Create the directory holding the database file; warn when the index page is missing.
pub async fn ensure_env(index_path: &str, data_dir: Option<&Path>) -> anyhow::Result<()> {
    if tokio::fs::metadata(index_path).await.is_err() {
        warn!(%index_path, "index page not found; GET / will 404");
    }
    if let Some(dir) = data_dir.filter(|d| !d.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    }
    Ok(())
}
