//! Core types for the invoker (command-line triple + stdout JSON contract).

use std::path::PathBuf;

use serde::Serialize;

use crate::error::InvokeError;

pub const SUCCESS_MESSAGE: &str = "API call successful";

/// One requested invocation: which model, where the body is, where the reply goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
  pub model_id: String,
  pub input: PathBuf,
  pub output: PathBuf,
}

impl Invocation {
  pub fn new(
    model_id: impl Into<String>,
    input: impl Into<PathBuf>,
    output: impl Into<PathBuf>,
  ) -> Self {
    Self {
      model_id: model_id.into(),
      input: input.into(),
      output: output.into(),
    }
  }
}

/// Status line printed on stdout. Field order is part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
  pub success: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<String>,
}

impl Outcome {
  pub fn ok() -> Self {
    Self {
      success: true,
      message: Some(SUCCESS_MESSAGE.to_string()),
      error: None,
      details: None,
    }
  }

  pub fn failed(err: &InvokeError) -> Self {
    Self {
      success: false,
      message: None,
      error: Some(err.kind().label().to_string()),
      details: Some(err.to_string()),
    }
  }

  pub fn exit_code(&self) -> i32 {
    if self.success {
      0
    } else {
      1
    }
  }
}

impl From<Result<(), InvokeError>> for Outcome {
  fn from(result: Result<(), InvokeError>) -> Self {
    match result {
      Ok(()) => Self::ok(),
      Err(e) => Self::failed(&e),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::format::to_status_line;

  #[test]
  fn success_line_matches_contract() {
    let out = Outcome::ok();
    assert_eq!(out.exit_code(), 0);
    assert_eq!(
      to_status_line(&out).unwrap(),
      r#"{"success": true, "message": "API call successful"}"#
    );
  }

  #[test]
  fn failure_line_carries_label_and_details() {
    let out = Outcome::failed(&InvokeError::service("denied"));
    assert_eq!(out.exit_code(), 1);
    assert_eq!(
      to_status_line(&out).unwrap(),
      r#"{"success": false, "error": "AWS API Error", "details": "denied"}"#
    );
  }
}
