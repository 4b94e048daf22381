use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::errors::LookupError;

/// Error returned by HTTP handlers.
///
/// Rendered as a plain-text body holding only the message.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message } | AppError::Internal { message } => message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Validation { message } | AppError::Internal { message } => message,
        };

        (status, message).into_response()
    }
}

// Every lookup failure is a 500, root server misses included.
impl From<LookupError> for AppError {
    fn from(e: LookupError) -> Self {
        AppError::internal(e.to_string())
    }
}
