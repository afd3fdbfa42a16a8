//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("validation failed: {0}")]
  Validation(String),

  #[error("unauthorized")]
  Unauthorized,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Store(Box::new(e))
  }
}

impl From<tresbs_core::Error> for ApiError {
  fn from(e: tresbs_core::Error) -> Self {
    match e {
      tresbs_core::Error::Validation(m) => Self::Validation(m),
      e @ tresbs_core::Error::NotFound { .. } => Self::NotFound(e.to_string()),
    }
  }
}

impl From<tresbs_admin::Error> for ApiError {
  fn from(e: tresbs_admin::Error) -> Self {
    match e {
      tresbs_admin::Error::Core(e) => e.into(),
      tresbs_admin::Error::Unauthorized => Self::Unauthorized,
      tresbs_admin::Error::Store(e) => Self::Store(e),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
      ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let message = match self {
      ApiError::NotFound(m) | ApiError::Validation(m) => m,
      other => other.to_string(),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
