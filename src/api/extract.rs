use axum::extract::FromRequest;

use super::error::ApiError;

/// `axum::Json` with body rejections reported through [`ApiError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);
