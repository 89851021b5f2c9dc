use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

/// Terminal request outcome for every failure path.
///
/// Clients only ever see the bare status code — `message` and `details`
/// exist for the server-side logs and never leave the process.
#[derive(Debug)]
pub enum AppError {
    /// Write-token mismatch (403).
    Forbidden { message: String, details: Value },
    /// Wrong verb on the write path (422).
    Unprocessable { message: String, details: Value },
    /// Key absent or mapped to an empty value (404).
    NotFound { message: String, details: Value },
    /// Store, body-read, or encoding failure (500).
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn forbidden(message: impl Into<String>, details: Value) -> Self {
        Self::Forbidden {
            message: message.into(),
            details,
        }
    }
    pub fn unprocessable(message: impl Into<String>, details: Value) -> Self {
        Self::Unprocessable {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// The status code this error renders as.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (message, details) = match self {
            AppError::Forbidden { message, details }
            | AppError::Unprocessable { message, details }
            | AppError::NotFound { message, details }
            | AppError::Internal { message, details } => (message, details),
        };

        // Detail stays server-side; the client gets an empty body.
        tracing::debug!(
            status = status.as_u16(),
            %message,
            %details,
            "request rejected",
        );

        status.into_response()
    }
}
