use shared::error::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        source: reqwest::Error,
    },
    #[error("{endpoint} rejected the request with status {status}: {error}")]
    Rejected {
        endpoint: &'static str,
        status: u16,
        error: ApiError,
    },
    #[error("malformed response from {endpoint}: {source}")]
    MalformedResponse {
        endpoint: &'static str,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Camera(#[from] CameraError),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// True when no HTTP exchange completed at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport { .. })
    }

    pub fn endpoint(&self) -> Option<&'static str> {
        match self {
            ClientError::Transport { endpoint, .. }
            | ClientError::Rejected { endpoint, .. }
            | ClientError::MalformedResponse { endpoint, .. } => Some(endpoint),
            ClientError::Camera(_) | ClientError::Config(_) => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum CameraError {
    #[error("camera access denied: {0}")]
    AccessDenied(String),
    #[error("failed to read frame source {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("frame is not a JPEG image")]
    NotJpeg,
    #[error("failed to encode frame: {0}")]
    Encode(#[from] image::ImageError),
}
