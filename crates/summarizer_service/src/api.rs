use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Deserializer, Serialize};
use service_logging::{service_error, service_warn};
use summarizer_core::{Summary, SummarizeError};
use thiserror::Error;

/// Body of `POST /summarize`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SummaryRequest {
    pub content: String,
    /// Page the content came from. Logged, never used for scoring.
    #[serde(default)]
    pub url: Option<String>,
    /// Absent: service default. `null`: no limit.
    #[serde(default, deserialize_with = "present")]
    pub max_length: Option<Option<i64>>,
}

impl SummaryRequest {
    /// Resolve the character limit to pass to the summarizer.
    pub fn resolved_max_length(&self, default: usize) -> Result<Option<usize>, ApiError> {
        match self.max_length {
            None => Ok(Some(default)),
            Some(None) => Ok(None),
            Some(Some(value)) => usize::try_from(value).map(Some).map_err(|_| {
                ApiError::Validation(format!("max_length must be non-negative, got {value}"))
            }),
        }
    }
}

/// Marks a field as present even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
    pub original_length: usize,
    pub summary_length: usize,
}

impl From<Summary> for SummaryResponse {
    fn from(summary: Summary) -> Self {
        Self {
            summary: summary.summary,
            original_length: summary.original_length,
            summary_length: summary.summary_length,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SummarizeError> for ApiError {
    fn from(err: SummarizeError) -> Self {
        match err {
            SummarizeError::InvalidInput(message) => ApiError::BadRequest(message),
            SummarizeError::Internal(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            service_error!("summarize failed: {}", self);
        } else {
            service_warn!("rejected request ({}): {}", status.as_u16(), self);
        }
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
