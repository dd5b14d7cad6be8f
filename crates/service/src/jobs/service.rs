use std::sync::Arc;
use tracing::{debug, info, instrument};

use models::job::{self, JobFields};

use crate::errors::ServiceError;
use crate::jobs::domain::JobStats;
use crate::jobs::repository::JobRepository;

/// Application service for the job collection.
/// Maps "no such row" into `ServiceError::NotFound`; create validation lives in `models::job`.
pub struct JobService<R: JobRepository> {
    repo: Arc<R>,
}

impl<R: JobRepository> JobService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<job::Model>, ServiceError> {
        self.repo.list().await
    }

    /// Returns the id assigned to the new job.
    #[instrument(skip_all, fields(company = %fields.company, position = %fields.position))]
    pub async fn create(&self, fields: JobFields) -> Result<i32, ServiceError> {
        let created = self.repo.create(fields).await?;
        info!(id = created.id, "job_created");
        Ok(created.id)
    }

    /// Full replacement of the mutable fields. Empty company/position are accepted here.
    #[instrument(skip(self, fields))]
    pub async fn update(&self, id: i32, fields: JobFields) -> Result<(), ServiceError> {
        if !self.repo.update(id, fields).await? {
            return Err(ServiceError::not_found("job"));
        }
        info!("job_updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("job"));
        }
        info!("job_deleted");
        Ok(())
    }

    pub async fn stats(&self) -> Result<JobStats, ServiceError> {
        let counts = self.repo.count_by_status().await?;
        let stats = JobStats::from_status_counts(counts);
        debug!(total = stats.total, other = stats.other(), "job_stats");
        Ok(stats)
    }

    pub async fn health(&self) -> Result<(), ServiceError> {
        self.repo.ping().await
    }
}
