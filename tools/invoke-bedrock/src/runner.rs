//! Invocation runner: read request → invoke model → write response.
//!
//! Each stage returns its own error variant, so which bucket a failure lands in
//! depends only on where it happened. Nothing is retried and a partially
//! written output file is left as is.

use std::fs;
use std::future::Future;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::client::InferenceClient;
use crate::error::InvokeError;
use crate::format;
use crate::types::{Invocation, Outcome};

pub struct InvocationRunner<C> {
  client: C,
}

impl<C: InferenceClient> InvocationRunner<C> {
  pub fn new(client: C) -> Self {
    Self { client }
  }

  pub fn client(&self) -> &C {
    &self.client
  }

  /// Run one invocation and fold the result into a status [`Outcome`].
  pub async fn run(&self, invocation: &Invocation) -> Outcome {
    report(invocation, self.invoke(invocation).await)
  }

  /// Run one invocation, surfacing the typed error.
  pub async fn invoke(&self, invocation: &Invocation) -> Result<(), InvokeError> {
    let request = read_request(&invocation.input)?;
    self.forward(invocation, &request).await
  }

  /// Send an already-loaded request and write the reply to `invocation.output`.
  pub async fn forward(&self, invocation: &Invocation, request: &Value) -> Result<(), InvokeError> {
    let body = serde_json::to_vec(request)?;

    debug!(model_id = %invocation.model_id, bytes = body.len(), "invoking model");
    let raw = self.client.invoke_model(&invocation.model_id, body).await?;
    debug!(bytes = raw.len(), "response received");

    let response = decode_response(&raw)?;
    write_response(&invocation.output, &response)
  }
}

/// Read the request first and only then build the client with `connect`, so a
/// bad input file never touches the credential chain.
pub async fn run_connecting<C, F, Fut>(invocation: &Invocation, connect: F) -> Outcome
where
  C: InferenceClient,
  F: FnOnce() -> Fut,
  Fut: Future<Output = C>,
{
  report(invocation, connect_and_invoke(invocation, connect).await)
}

async fn connect_and_invoke<C, F, Fut>(invocation: &Invocation, connect: F) -> Result<(), InvokeError>
where
  C: InferenceClient,
  F: FnOnce() -> Fut,
  Fut: Future<Output = C>,
{
  let request = read_request(&invocation.input)?;
  let runner = InvocationRunner::new(connect().await);
  runner.forward(invocation, &request).await
}

fn report(invocation: &Invocation, result: Result<(), InvokeError>) -> Outcome {
  if let Err(e) = &result {
    warn!(model_id = %invocation.model_id, category = e.kind().label(), error = %e, "invocation failed");
  }
  Outcome::from(result)
}

/// Load the request body. The JSON shape is not checked.
pub fn read_request(path: &Path) -> Result<Value, InvokeError> {
  let contents = fs::read_to_string(path).map_err(|e| InvokeError::io(path, e))?;
  Ok(serde_json::from_str(&contents)?)
}

pub fn decode_response(raw: &[u8]) -> Result<Value, InvokeError> {
  Ok(serde_json::from_slice(raw)?)
}

/// Create or truncate `path` and write `value` pretty-printed.
pub fn write_response(path: &Path, value: &Value) -> Result<(), InvokeError> {
  let bytes = format::to_pretty_bytes(value)?;
  fs::write(path, &bytes).map_err(|e| InvokeError::io(path, e))?;
  debug!(path = %path.display(), bytes = bytes.len(), "response written");
  Ok(())
}
