//! HTTP application wiring (Axum router + middleware).
//!
//! - `routes/`: liveness, fallback and the pluggable route groups
//! - `dto.rs`: response bodies owned by the bootstrap
//! - `errors.rs`: the generic 500/404 responses
//! - `extract.rs`: extractors whose rejections map onto `errors.rs`

use axum::extract::{DefaultBodyLimit, FromRef};
use axum::routing::get;
use axum::Router;
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

use crate::config::HttpConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod extract;
pub mod routes;

pub use routes::RouteGroups;

/// State shared with every mounted route group.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: PgPool,
}

impl AppState {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

/// Build the full HTTP router (public entrypoint used by `server.rs`).
///
/// Registration order: CORS, JSON body limits, `GET /api/health`, the route
/// groups, the generic error handler and finally the 404 fallback.
pub fn build_app(state: AppState, groups: RouteGroups, http: &HttpConfig) -> Router {
    let health = get(routes::system::health).fallback(routes::system::not_found);
    let mut router = Router::new()
        .route("/api/health", health.clone())
        .route("/api/health/", health);

    for (prefix, group) in groups.into_inner() {
        tracing::debug!(prefix = %format!("/api{prefix}"), "mounting route group");
        router = router.nest(&format!("/api{prefix}"), group);
    }

    router
        .fallback(routes::system::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::trace())
                .layer(middleware::cors(http))
                .layer(CatchPanicLayer::custom(errors::panic_response))
                .layer(axum::middleware::map_response(
                    middleware::method_not_allowed_as_not_found,
                ))
                .layer(DefaultBodyLimit::max(http.json_body_limit)),
        )
        .with_state(state)
}
