//! Typed client for the attendance backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    error::ApiError,
    protocol::{
        AttendanceAck, GestureDetectResponse, GestureFrameRequest, ManualAttendanceRequest,
        MarkAttendanceRequest, StatsResponse,
    },
};
use tracing::debug;
use url::Url;

use crate::error::ClientError;

const MARK_ENDPOINT: &str = "/attendance/mark";
const STATS_ENDPOINT: &str = "/attendance/stats";
const MANUAL_ENDPOINT: &str = "/attendance/manual";
const DETECT_ENDPOINT: &str = "/api/gesture/detect";

#[async_trait]
pub trait AttendanceApi: Send + Sync {
    async fn mark_attendance(
        &self,
        roll_number: &str,
        manual: bool,
    ) -> Result<AttendanceAck, ClientError>;
    async fn stats(&self, roll_number: &str) -> Result<StatsResponse, ClientError>;
    async fn manual_attendance(
        &self,
        roll_number: &str,
        code: &str,
    ) -> Result<AttendanceAck, ClientError>;
    async fn detect_gesture(&self, image_data_url: &str)
        -> Result<GestureDetectResponse, ClientError>;
}

#[derive(Clone)]
pub struct HttpAttendanceApi {
    http: Client,
    base_url: String,
}

impl HttpAttendanceApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ClientError::Config(format!("failed to build http client: {err}")))?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The roll number is pushed as a single path segment, so `/`, `?` and
    /// `#` in it are percent-encoded.
    fn stats_url(&self, roll_number: &str) -> Result<Url, ClientError> {
        let mut url = Url::parse(&format!("{}{STATS_ENDPOINT}", self.base_url)).map_err(|err| {
            ClientError::Config(format!("invalid api base url {}: {err}", self.base_url))
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                ClientError::Config(format!("api base url {} cannot carry a path", self.base_url))
            })?
            .push(roll_number);
        Ok(url)
    }
}

#[async_trait]
impl AttendanceApi for HttpAttendanceApi {
    async fn mark_attendance(
        &self,
        roll_number: &str,
        manual: bool,
    ) -> Result<AttendanceAck, ClientError> {
        let response = self
            .http
            .post(format!("{}{MARK_ENDPOINT}", self.base_url))
            .json(&MarkAttendanceRequest {
                roll_number: roll_number.to_string(),
                manual,
            })
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                endpoint: MARK_ENDPOINT,
                source,
            })?;
        decode(MARK_ENDPOINT, response).await
    }

    async fn stats(&self, roll_number: &str) -> Result<StatsResponse, ClientError> {
        let response = self
            .http
            .get(self.stats_url(roll_number)?)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                endpoint: STATS_ENDPOINT,
                source,
            })?;
        decode(STATS_ENDPOINT, response).await
    }

    async fn manual_attendance(
        &self,
        roll_number: &str,
        code: &str,
    ) -> Result<AttendanceAck, ClientError> {
        let response = self
            .http
            .post(format!("{}{MANUAL_ENDPOINT}", self.base_url))
            .json(&ManualAttendanceRequest {
                roll_number: roll_number.to_string(),
                code: code.to_string(),
            })
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                endpoint: MANUAL_ENDPOINT,
                source,
            })?;
        decode(MANUAL_ENDPOINT, response).await
    }

    async fn detect_gesture(
        &self,
        image_data_url: &str,
    ) -> Result<GestureDetectResponse, ClientError> {
        let response = self
            .http
            .post(format!("{}{DETECT_ENDPOINT}", self.base_url))
            .json(&GestureFrameRequest {
                image: image_data_url.to_string(),
            })
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                endpoint: DETECT_ENDPOINT,
                source,
            })?;
        decode(DETECT_ENDPOINT, response).await
    }
}

async fn decode<T: DeserializeOwned>(
    endpoint: &'static str,
    response: Response,
) -> Result<T, ClientError> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|source| ClientError::Transport { endpoint, source })?;
    debug!(endpoint, status = status.as_u16(), bytes = body.len(), "backend responded");

    if !status.is_success() {
        return Err(ClientError::Rejected {
            endpoint,
            status: status.as_u16(),
            error: ApiError::from_response(status.as_u16(), &body),
        });
    }

    serde_json::from_slice(&body).map_err(|source| ClientError::MalformedResponse { endpoint, source })
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
