//! Error types for `tresbs-admin`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Core(#[from] tresbs_core::Error),

  #[error("unauthorized")]
  Unauthorized,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Store(Box::new(e))
  }

  pub fn validation(message: impl Into<String>) -> Self {
    Self::Core(tresbs_core::Error::validation(message))
  }

  pub fn is_validation(&self) -> bool {
    matches!(self, Self::Core(tresbs_core::Error::Validation(_)))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
