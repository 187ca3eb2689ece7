//! Echo error type.

use crate::http::{EchoResponse, StatusCode};
use http_body_util::LengthLimitError;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error raised while reading or interpreting a request.
#[derive(Debug, Clone)]
pub struct EchoError {
    /// Error message.
    pub message: String,
    /// HTTP status the error maps to.
    pub status: StatusCode,
}

impl EchoError {
    /// Create a new EchoError.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Create an EchoError with a specific status.
    pub fn with_status(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// Create a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::BAD_REQUEST, message)
    }

    /// Create a payload too large error.
    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::PAYLOAD_TOO_LARGE, message)
    }

    /// Map a failure reading a size-limited request body.
    pub fn from_body_error(err: BoxError) -> Self {
        if err.is::<LengthLimitError>() {
            EchoError::payload_too_large("Request body too large")
        } else {
            EchoError::new(format!("Failed to read request body: {}", err))
        }
    }
}

impl std::fmt::Display for EchoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for EchoError {}

impl From<EchoError> for EchoResponse {
    fn from(err: EchoError) -> Self {
        EchoResponse::error(err.status, err.message)
    }
}

impl From<std::io::Error> for EchoError {
    fn from(err: std::io::Error) -> Self {
        EchoError::new(err.to_string())
    }
}

impl From<serde_json::Error> for EchoError {
    fn from(err: serde_json::Error) -> Self {
        EchoError::new(err.to_string())
    }
}

impl From<multer::Error> for EchoError {
    fn from(err: multer::Error) -> Self {
        match err {
            multer::Error::StreamSizeExceeded { .. } | multer::Error::FieldSizeExceeded { .. } => {
                EchoError::payload_too_large(err.to_string())
            }
            multer::Error::StreamReadFailed(source) => EchoError::from_body_error(source),
            _ => EchoError::bad_request(err.to_string()),
        }
    }
}
