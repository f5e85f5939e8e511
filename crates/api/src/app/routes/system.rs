use axum::Json;
use axum::response::Response;

use crate::app::dto::HealthResponse;
use crate::app::errors;

/// Liveness probe. Does not touch the database.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::now())
}

pub async fn not_found() -> Response {
    errors::not_found()
}
