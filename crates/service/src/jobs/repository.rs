use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::job::{self, JobFields};

use crate::errors::ServiceError;

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<job::Model>, ServiceError>;
    async fn create(&self, fields: JobFields) -> Result<job::Model, ServiceError>;
    async fn update(&self, id: i32, fields: JobFields) -> Result<bool, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
    async fn count_by_status(&self) -> Result<Vec<(String, i64)>, ServiceError>;
    async fn ping(&self) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmJobRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmJobRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl JobRepository for SeaOrmJobRepository {
    async fn list(&self) -> Result<Vec<job::Model>, ServiceError> {
        crate::db::job_service::list_jobs(&self.db).await
    }

    async fn create(&self, fields: JobFields) -> Result<job::Model, ServiceError> {
        crate::db::job_service::create_job(&self.db, fields).await
    }

    async fn update(&self, id: i32, fields: JobFields) -> Result<bool, ServiceError> {
        crate::db::job_service::update_job(&self.db, id, fields).await
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        crate::db::job_service::delete_job(&self.db, id).await
    }

    async fn count_by_status(&self) -> Result<Vec<(String, i64)>, ServiceError> {
        crate::db::job_service::count_by_status(&self.db).await
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        models::db::test_connection(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }
}
