//! Structured error types for the studio API.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Failure talking to a third-party API (LLM or YouTube).
#[derive(Debug, Error)]
pub enum ClientError {
  #[error("http: {0}")]
  Http(#[from] reqwest::Error),

  #[error("api returned {status}: {body}")]
  Api { status: u16, body: String },

  #[error("unexpected response: {0}")]
  Malformed(String),
}

/// Error returned by handlers; rendered as `{"success": false, "error": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  Validation(String),

  #[error("{0}")]
  NotFound(&'static str),

  #[error("upstream: {0}")]
  Upstream(#[from] ClientError),

  /// Body that is not JSON, or not the expected shape.
  #[error("{}", .0.body_text())]
  Json(#[from] JsonRejection),

  #[error("{}", .0.body_text())]
  Query(#[from] QueryRejection),

  #[error("store: {0}")]
  Store(StoreError),
}

impl From<StoreError> for ApiError {
  fn from(err: StoreError) -> Self {
    match err {
      StoreError::Rejected(reason) => Self::Validation(reason),
      other => Self::Store(other),
    }
  }
}

impl ApiError {
  pub fn validation(reason: impl Into<String>) -> Self {
    Self::Validation(reason.into())
  }

  pub fn status(&self) -> StatusCode {
    match self {
      Self::Validation(_) => StatusCode::BAD_REQUEST,
      Self::NotFound(_) => StatusCode::NOT_FOUND,
      Self::Json(rejection) => rejection.status(),
      Self::Query(rejection) => rejection.status(),
      Self::Upstream(_) => StatusCode::BAD_GATEWAY,
      Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      tracing::error!(error = %self, "request failed");
    }
    let body = Json(json!({ "success": false, "error": self.to_string() }));
    (status, body).into_response()
  }
}
