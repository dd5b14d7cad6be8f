use std::sync::Arc;

use axum::{
    extract::State,
    middleware,
    routing::{get, put},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    services::ServeFile,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::Health;
use service::jobs::{JobService, SeaOrmJobRepository};

use crate::errors::{self, JsonApiError};

pub mod jobs;

/// Shared handler state: the job service backed by the SQLite pool.
#[derive(Clone)]
pub struct ServerState {
    pub jobs: Arc<JobService<SeaOrmJobRepository>>,
}

impl ServerState {
    pub fn new(db: sea_orm::DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmJobRepository::new(db));
        Self { jobs: Arc::new(JobService::new(repo)) }
    }
}

pub async fn health(State(state): State<ServerState>) -> Result<Json<Health>, JsonApiError> {
    state.jobs.health().await?;
    Ok(Json(Health { status: "ok" }))
}

/// Build the full application router: static page, health, job API, JSON fallback
pub fn build_router(state: ServerState, cors: CorsLayer, index_path: &str) -> Router {
    let index = Router::new()
        .route_service("/", ServeFile::new(index_path))
        .layer(middleware::map_response(errors::json_not_found));

    let api = Router::new()
        .route("/api/jobs", get(jobs::list).post(jobs::create))
        .route("/api/jobs/:id", put(jobs::update).delete(jobs::delete))
        .route("/api/stats", get(jobs::stats));

    let router = Router::new()
        .merge(index)
        .route("/health", get(health))
        .merge(api)
        .fallback(errors::fallback)
        .with_state(state);
    apply_layers(router, cors)
}

/// Panic catching, request tracing and CORS, outermost first.
pub fn apply_layers(router: Router, cors: CorsLayer) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(CatchPanicLayer::custom(errors::panic_response))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(
                        DefaultMakeSpan::new()
                            .level(Level::INFO)
                            .include_headers(false),
                    )
                    .on_request(
                        DefaultOnRequest::new()
                            .level(Level::INFO),
                    )
                    .on_response(
                        DefaultOnResponse::new()
                            .level(Level::INFO)
                            .include_headers(false),
                    )
                    .on_failure(
                        DefaultOnFailure::new()
                            .level(Level::ERROR),
                    ),
            )
            .layer(cors),
    )
}
