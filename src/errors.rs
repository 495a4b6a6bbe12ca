use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

/// Domain-specific error types for the analyzer service.
/// Client errors are surfaced immediately with a 400; there are no retries
/// and no partial results. Startup errors are logged and end the process.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    MalformedInput(String),

    #[error("Maximum of {max} options contracts allowed")]
    TooManyContracts { max: usize },

    #[error("contract {index}: {reason}")]
    InvalidContract { index: usize, reason: &'static str },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(String),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedInput(_)
            | Self::TooManyContracts { .. }
            | Self::InvalidContract { .. } => StatusCode::BAD_REQUEST,
            Self::Config(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ServiceError {
    fn from(e: JsonRejection) -> Self {
        ServiceError::MalformedInput(e.body_text())
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(e: std::io::Error) -> Self {
        ServiceError::Io(e.to_string())
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
