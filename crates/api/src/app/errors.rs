//! Request-scoped error handling.
//!
//! Every failure that reaches the HTTP boundary is rendered the same way:
//! `500 { "message": "Internal server error", "error": <description> }`.

use std::any::Any;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::app::dto::{ErrorBody, NotFoundBody};

/// Error type for handlers mounted on the application router.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Json(#[from] JsonRejection),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    pub fn msg<M>(message: M) -> Self
    where
        M: std::fmt::Display + std::fmt::Debug + Send + Sync + 'static,
    {
        Self::Other(anyhow::Error::msg(message))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self, "request failed");
        internal_error(self.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

pub fn internal_error(error: impl Into<String>) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::internal(error))).into_response()
}

pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(NotFoundBody::default())).into_response()
}

/// Turns a handler panic into the generic 500 response.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let error = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "handler panicked".to_string()
    };

    tracing::error!(%error, "handler panicked");
    internal_error(error)
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    async fn body_json(res: Response) -> serde_json::Value {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn api_error_renders_generic_500() {
        let res = ApiError::msg("medication store unavailable").into_response();

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(res).await;
        assert_eq!(body["message"], "Internal server error");
        assert_eq!(body["error"], "medication store unavailable");
    }

    #[tokio::test]
    async fn database_errors_use_their_display_text() {
        let res = ApiError::from(sqlx::Error::RowNotFound).into_response();

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(res).await;
        assert_eq!(body["error"], sqlx::Error::RowNotFound.to_string());
    }

    #[tokio::test]
    async fn panic_payloads_are_reported() {
        let res = panic_response(Box::new("static message"));
        assert_eq!(body_json(res).await["error"], "static message");

        let res = panic_response(Box::new(String::from("owned message")));
        assert_eq!(body_json(res).await["error"], "owned message");

        let res = panic_response(Box::new(42_u8));
        assert_eq!(body_json(res).await["error"], "handler panicked");
    }
}
