//! Cross-cutting HTTP layers.

use axum::http::{Method, StatusCode};
use axum::response::Response;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::app::errors;
use crate::config::HttpConfig;

/// Methods advertised in preflight responses.
const CORS_METHODS: [Method; 6] = [
    Method::GET,
    Method::HEAD,
    Method::PUT,
    Method::PATCH,
    Method::POST,
    Method::DELETE,
];

/// CORS policy: any origin unless an allow-list is configured; requested
/// headers are mirrored back.
pub fn cors(config: &HttpConfig) -> CorsLayer {
    let origin = match &config.cors_allowed_origins {
        Some(origins) => AllowOrigin::list(origins.iter().cloned()),
        None => AllowOrigin::any(),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(CORS_METHODS.to_vec())
        .allow_headers(AllowHeaders::mirror_request())
}

/// One span per request, with status and latency logged at completion.
pub fn trace() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

/// A path that exists under a different method is still an unmatched route.
pub async fn method_not_allowed_as_not_found(res: Response) -> Response {
    if res.status() == StatusCode::METHOD_NOT_ALLOWED {
        errors::not_found()
    } else {
        res
    }
}
