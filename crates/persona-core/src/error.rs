//! Error types for `persona-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown person type tag: {0:?}")]
  UnknownPersonType(String),

  #[error("expected a JSON object or array of objects, found {0}")]
  UnexpectedDocument(&'static str),

  #[error("serialization error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
