//! Request extractors whose rejections use the `{ "error", "code" }` body.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with rejections mapped to [`AppError::BadRequest`].
///
/// Malformed JSON, a wrong content type and bodies that do not match the
/// DTO all answer 400 with code `BAD_REQUEST`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
