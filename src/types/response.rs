use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::ErrorResponse;

/// Lookup outcome for routes that report a miss as `200 {"detail"}`.
///
/// Routes returning this never answer a miss with an error status; routes
/// that do use [`crate::errors::AppError`] instead.
#[derive(Debug)]
pub enum SoftLookup<T> {
    Found(T),
    Missing(&'static str),
}

impl<T> SoftLookup<T> {
    /// `Found` for `Some`, `Missing(detail)` for `None`
    pub fn from_option(value: Option<T>, detail: &'static str) -> Self {
        match value {
            Some(v) => SoftLookup::Found(v),
            None => SoftLookup::Missing(detail),
        }
    }
}

impl<T: Serialize> IntoResponse for SoftLookup<T> {
    fn into_response(self) -> Response {
        match self {
            SoftLookup::Found(value) => (StatusCode::OK, Json(value)).into_response(),
            SoftLookup::Missing(detail) => {
                tracing::debug!("Soft miss: {}", detail);
                let body = ErrorResponse {
                    detail: detail.to_string(),
                };
                (StatusCode::OK, Json(body)).into_response()
            }
        }
    }
}
