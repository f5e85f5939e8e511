//! Extractors for route groups.

use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::app::errors::ApiError;

/// JSON body extractor whose rejections go through [`ApiError`].
///
/// Malformed JSON, a missing `Content-Type` or an oversize body therefore
/// produce the generic 500 body instead of axum's plain-text 4xx.
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
