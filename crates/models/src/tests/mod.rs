
/// Job entity CRUD tests
pub mod job_tests;

use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

/// Fresh SQLite file under `target/test-data/<uuid>/` with the schema applied.
pub async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let dir = format!("target/test-data/{}", uuid::Uuid::new_v4());
    tokio::fs::create_dir_all(&dir).await?;
    let cfg = DatabaseConfig::for_sqlite_file(format!("{dir}/jobs.db"));
    crate::db::connect_and_migrate(&cfg).await
}
