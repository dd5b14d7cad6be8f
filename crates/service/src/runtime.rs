//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so the server resolves the data
//! directory from the database config in one place.

use configs::AppConfig;

/// Create the SQLite data directory and check the index page is present.
pub async fn ensure_env(cfg: &AppConfig) -> anyhow::Result<()> {
    let db_path = cfg.database.sqlite_path();
    let data_dir = db_path.as_deref().and_then(|p| p.parent());
    common::env::ensure_env(&cfg.frontend.index_path, data_dir).await
}
