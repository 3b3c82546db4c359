use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose body rejections surface as `AppError`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
