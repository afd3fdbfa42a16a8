//! Error types for `tresbs-core`.

use thiserror::Error;

/// The two failure kinds of the content model.
///
/// Neither is fatal: a validation failure means the mutation was refused, and
/// a missing id means the operation had nothing to act on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("validation failed: {0}")]
  Validation(String),

  #[error("{kind} not found: {id}")]
  NotFound { kind: &'static str, id: String },
}

impl Error {
  pub fn validation(message: impl Into<String>) -> Self {
    Self::Validation(message.into())
  }

  pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
    Self::NotFound { kind, id: id.into() }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reject a value that is empty once surrounding whitespace is removed.
pub fn require(field: &str, value: &str) -> Result<()> {
  if value.trim().is_empty() {
    return Err(Error::validation(format!("{field} is required")));
  }
  Ok(())
}
