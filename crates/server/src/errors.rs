use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

pub const NOT_FOUND: &str = "Not found";
pub const JOB_NOT_FOUND: &str = "Job not found";
pub const INTERNAL: &str = "Internal server error";

/// Error response rendered as `{"error": "..."}` with the given status.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self { status, error: error.into() }
    }

    pub fn bad_request(error: impl Into<String>) -> Self { Self::new(StatusCode::BAD_REQUEST, error) }

    pub fn not_found() -> Self { Self::new(StatusCode::NOT_FOUND, NOT_FOUND) }

    pub fn internal() -> Self { Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL) }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.error })).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        if let Some(msg) = e.validation_message() {
            return Self::bad_request(msg);
        }
        match e {
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, JOB_NOT_FOUND),
            other => {
                error!(err = %other, "request failed");
                Self::internal()
            }
        }
    }
}

/// Any route that matches nothing.
pub async fn fallback() -> JsonApiError {
    JsonApiError::not_found()
}

/// `ServeFile` answers a missing file with an empty 404; give it the JSON body.
pub async fn json_not_found(res: Response) -> Response {
    if res.status() == StatusCode::NOT_FOUND {
        return JsonApiError::not_found().into_response();
    }
    res
}

/// Used by `CatchPanicLayer`: a panicking handler still answers with JSON.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = %detail, "handler panicked");
    JsonApiError::internal().into_response()
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("runtime check failed: {0}")]
    Runtime(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn service_errors_map_to_status() {
        let e: JsonApiError = ServiceError::from(ModelError::Validation("Company and position are required".into())).into();
        assert_eq!(e, JsonApiError::bad_request("Company and position are required"));

        let e: JsonApiError = ServiceError::not_found("job").into();
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        assert_eq!(e.error, JOB_NOT_FOUND);

        let e: JsonApiError = ServiceError::Db("database is locked".into()).into();
        assert_eq!(e, JsonApiError::internal());
    }

    #[tokio::test]
    async fn empty_not_found_gets_json_body() {
        let res = json_not_found(StatusCode::NOT_FOUND.into_response()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"error":"Not found"}"#);

        let res = json_not_found((StatusCode::OK, "<html>").into_response()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"<html>");
    }

    #[test]
    fn panic_payloads_render_internal_error() {
        let res = panic_response(Box::new("boom"));
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let res = panic_response(Box::new(String::from("boom")));
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
