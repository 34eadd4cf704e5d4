use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    NotFound,
    Internal,
    Unexpected,
}

impl ErrorCode {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 | 422 => ErrorCode::Validation,
            404 => ErrorCode::NotFound,
            500..=599 => ErrorCode::Internal,
            _ => ErrorCode::Unexpected,
        }
    }
}

/// Body the attendance backend sends alongside a non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{code:?}: {message}")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Builds the error from a status code and whatever body came with it.
    /// Bodies that are not an [`ApiErrorBody`] are kept verbatim.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let message = match serde_json::from_slice::<ApiErrorBody>(body) {
            Ok(parsed) => parsed.error,
            Err(_) => String::from_utf8_lossy(body).trim().to_string(),
        };
        Self::new(ErrorCode::from_status(status), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_backend_error_body() {
        let err = ApiError::from_response(404, br#"{"error":"Student not found"}"#);
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Student not found");
    }

    #[test]
    fn keeps_non_json_body_as_message() {
        let err = ApiError::from_response(502, b"bad gateway\n");
        assert_eq!(err.code, ErrorCode::Internal);
        assert_eq!(err.message, "bad gateway");
    }
}
