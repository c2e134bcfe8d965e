use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use wayfarer_core::blog::{blog_error_to_status_code, BlogError};

/// Error rendered as `{"error": "<message>"}`.
#[derive(Debug)]
pub enum AppError {
    Blog(BlogError),
    /// The request body could not be read as a post.
    InvalidBody(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Blog(err) => StatusCode::from_u16(blog_error_to_status_code(err))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Blog(err) => err.to_string(),
            Self::InvalidBody(message) => message,
        };

        if status.is_server_error() {
            tracing::error!(status = %status, message = %message, "API error");
        } else {
            tracing::warn!(status = %status, message = %message, "API error");
        }

        error_body(status, message)
    }
}

impl From<BlogError> for AppError {
    fn from(err: BlogError) -> Self {
        Self::Blog(err)
    }
}

pub fn error_body(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

/// Fallback for unknown routes.
pub async fn not_found() -> Response {
    error_body(StatusCode::NOT_FOUND, "Not Found")
}
