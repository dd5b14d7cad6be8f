#![cfg(test)]
use sea_orm::DatabaseConnection;
use configs::DatabaseConfig;
use models::db::connect_and_migrate;

/// Each test gets its own SQLite file so runs never share state.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let dir = format!("target/test-data/{}", uuid::Uuid::new_v4());
    tokio::fs::create_dir_all(&dir).await?;
    let cfg = DatabaseConfig::for_sqlite_file(format!("{dir}/jobs.db"));
    let db = connect_and_migrate(&cfg).await?;
    Ok(db)
}
