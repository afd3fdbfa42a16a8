//! Error types and axum `IntoResponse` implementation.

use axum::{
  Json,
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unauthorized")]
  Unauthorized,
  #[error("{0}")]
  NotFound(String),
  #[error("{0}")]
  Validation(String),
  #[error("bad request: {0}")]
  BadRequest(String),
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Store(Box::new(e))
  }
}

impl From<tresbs_core::Error> for Error {
  fn from(e: tresbs_core::Error) -> Self {
    match e {
      tresbs_core::Error::Validation(m) => Self::Validation(m),
      e @ tresbs_core::Error::NotFound { .. } => Self::NotFound(e.to_string()),
    }
  }
}

impl From<tresbs_admin::Error> for Error {
  fn from(e: tresbs_admin::Error) -> Self {
    match e {
      tresbs_admin::Error::Core(e) => e.into(),
      tresbs_admin::Error::Unauthorized => Self::Unauthorized,
      tresbs_admin::Error::Store(e) => Self::Store(e),
    }
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let status = match &self {
      Error::Unauthorized => StatusCode::UNAUTHORIZED,
      Error::NotFound(_) => StatusCode::NOT_FOUND,
      Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
      Error::BadRequest(_) => StatusCode::BAD_REQUEST,
      Error::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let mut res = (status, Json(json!({ "error": self.to_string() }))).into_response();
    if status == StatusCode::UNAUTHORIZED {
      res.headers_mut().insert(
        header::WWW_AUTHENTICATE,
        HeaderValue::from_static("Bearer realm=\"tresbs\""),
      );
    }
    res
  }
}
