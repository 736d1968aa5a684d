use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::shared::errors::AppError;

/// Handler error: input problems become 400 with their message, anything
/// else an opaque 500 whose detail only reaches the log.
#[derive(Debug)]
pub struct ApiError {
    error: AppError,
    public_message: &'static str,
}

impl ApiError {
    pub fn new(error: AppError, public_message: &'static str) -> Self {
        Self {
            error,
            public_message,
        }
    }

    /// Generic failure message for the check routes
    pub fn server(error: AppError) -> Self {
        Self::new(error, "Server Error")
    }

    pub fn status(&self) -> StatusCode {
        if self.error.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Unreadable request bodies get the same `{"error": ...}` shape as other input errors
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::server(AppError::InvalidInput(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self.error {
            AppError::InvalidInput(msg) => msg,
            other => {
                log::error!("{}: {}", self.public_message, other);
                self.public_message.to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
