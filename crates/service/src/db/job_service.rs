use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use models::job::{self, Entity as JobEntity, JobFields};
use crate::errors::ServiceError;

/// All jobs, newest first. Rows created in the same instant fall back to id order.
pub async fn list_jobs(db: &DatabaseConnection) -> Result<Vec<job::Model>, ServiceError> {
    let rows = JobEntity::find()
        .order_by_desc(job::Column::CreatedAt)
        .order_by_desc(job::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Create a job after validation.
pub async fn create_job(db: &DatabaseConnection, fields: JobFields) -> Result<job::Model, ServiceError> {
    // validations are in models::job
    let created = job::create(db, fields).await?;
    Ok(created)
}

/// Overwrite every mutable column of a job in one UPDATE; returns false when
/// no row has that id. Required fields are not re-checked here.
pub async fn update_job(db: &DatabaseConnection, id: i32, fields: JobFields) -> Result<bool, ServiceError> {
    let res = JobEntity::update_many()
        .set(fields.active_model())
        .filter(job::Column::Id.eq(id))
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

/// Delete a job; returns true if deleted.
pub async fn delete_job(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = JobEntity::delete_by_id(id).exec(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

/// Row count per distinct status, in a single grouped query.
pub async fn count_by_status(db: &DatabaseConnection) -> Result<Vec<(String, i64)>, ServiceError> {
    let rows = JobEntity::find()
        .select_only()
        .column(job::Column::Status)
        .column_as(job::Column::Id.count(), "count")
        .group_by(job::Column::Status)
        .into_tuple::<(String, i64)>()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}
