//! Error type shared by every generation stage.

use thiserror::Error;

/// Failure of a generation run.
///
/// Nothing partially built is returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaveError {
  /// Caller-supplied parameters were rejected before any work started.
  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  /// An internal invariant of node sharing or vertex indexing was broken.
  #[error("consistency error: {0}")]
  Consistency(String),
}

impl CaveError {
  pub(crate) fn invalid(message: impl Into<String>) -> Self {
    CaveError::InvalidArgument(message.into())
  }

  pub(crate) fn consistency(message: impl Into<String>) -> Self {
    CaveError::Consistency(message.into())
  }
}

pub type Result<T, E = CaveError> = std::result::Result<T, E>;
