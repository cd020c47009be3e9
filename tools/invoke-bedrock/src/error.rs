//! Structured error types for the invoker.
//!
//! Every failure lands in one of two buckets (see [`FailureKind`]). The bucket
//! is fixed by the variant, which in turn is fixed by the stage that failed.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvokeError {
  /// The remote call reported a failure (service error response, throttling,
  /// authorization, dispatch or timeout).
  #[error("{0}")]
  Service(String),

  #[error("{source}: {}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("{0}")]
  Json(#[from] serde_json::Error),
}

impl InvokeError {
  pub fn service(details: impl Into<String>) -> Self {
    Self::Service(details.into())
  }

  pub fn io(path: &Path, source: io::Error) -> Self {
    Self::Io {
      path: path.to_path_buf(),
      source,
    }
  }

  pub fn kind(&self) -> FailureKind {
    match self {
      Self::Service(_) => FailureKind::Service,
      Self::Io { .. } | Self::Json(_) => FailureKind::Unexpected,
    }
  }
}

/// Caller-facing failure category. Only affects the printed label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
  Service,
  Unexpected,
}

impl FailureKind {
  pub fn label(self) -> &'static str {
    match self {
      Self::Service => "AWS API Error",
      Self::Unexpected => "Unexpected Error",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn service_errors_map_to_aws_label() {
    let err = InvokeError::service("An error occurred (ThrottlingException)");
    assert_eq!(err.kind(), FailureKind::Service);
    assert_eq!(err.kind().label(), "AWS API Error");
    assert_eq!(err.to_string(), "An error occurred (ThrottlingException)");
  }

  #[test]
  fn local_errors_map_to_unexpected_label() {
    let io_err = InvokeError::io(
      Path::new("missing.json"),
      io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
    );
    assert_eq!(io_err.kind(), FailureKind::Unexpected);
    assert_eq!(io_err.to_string(), "No such file or directory: missing.json");

    let json_err: InvokeError = serde_json::from_str::<serde_json::Value>("{")
      .unwrap_err()
      .into();
    assert_eq!(json_err.kind().label(), "Unexpected Error");
    assert!(!json_err.to_string().is_empty());
  }
}
