use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use common::types::MessageBody;
use models::job::{self, JobFields};
use serde_json::Value;
use service::jobs::JobStats;
use tracing::{info, warn};

use crate::{errors::JsonApiError, routes::ServerState};

const REQUIRED: &str = "Company and position are required";
const NO_DATA: &str = "No data provided";

/// The request body as JSON, or `None` when it is missing, unparsable, or an
/// empty/falsy value such as `{}` or `null`.
fn payload(body: Result<Json<Value>, JsonRejection>) -> Option<Value> {
    let Json(value) = match body {
        Ok(v) => v,
        Err(rejection) => {
            warn!(%rejection, "unreadable job payload");
            return None;
        }
    };
    let empty = match &value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    };
    (!empty).then_some(value)
}

fn job_fields(value: Value) -> Result<JobFields, JsonApiError> {
    serde_json::from_value(value).map_err(|e| JsonApiError::bad_request(format!("Invalid job payload: {e}")))
}

/// Non-integer ids never reach a handler body; they answer like unknown routes.
fn job_id(id: Result<Path<i32>, PathRejection>) -> Result<i32, JsonApiError> {
    id.map(|Path(id)| id).map_err(|_| JsonApiError::not_found())
}

fn message(id: Option<i32>, text: &str) -> Json<MessageBody> {
    Json(MessageBody { id, message: text.to_string() })
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<job::Model>>, JsonApiError> {
    let jobs = state.jobs.list().await?;
    info!(count = jobs.len(), "list jobs");
    Ok(Json(jobs))
}

pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageBody>), JsonApiError> {
    let value = payload(body).ok_or_else(|| JsonApiError::bad_request(REQUIRED))?;
    let fields = job_fields(value)?;
    let id = state.jobs.create(fields).await?;
    Ok((StatusCode::CREATED, message(Some(id), "Job added successfully")))
}

pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageBody>, JsonApiError> {
    let id = job_id(id)?;
    let value = payload(body).ok_or_else(|| JsonApiError::bad_request(NO_DATA))?;
    let fields = job_fields(value)?;
    state.jobs.update(id, fields).await?;
    Ok(message(None, "Job updated successfully"))
}

pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<MessageBody>, JsonApiError> {
    let id = job_id(id)?;
    state.jobs.delete(id).await?;
    Ok(message(None, "Job deleted successfully"))
}

pub async fn stats(State(state): State<ServerState>) -> Result<Json<JobStats>, JsonApiError> {
    Ok(Json(state.jobs.stats().await?))
}
