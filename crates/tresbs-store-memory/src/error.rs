//! Error type for `tresbs-store-memory`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("{kind} id {id:?} already exists")]
  DuplicateId { kind: &'static str, id: String },

  #[error("{kind} id must not be empty")]
  EmptyId { kind: &'static str },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
