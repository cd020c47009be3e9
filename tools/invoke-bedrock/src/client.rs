//! Remote inference seam.
//!
//! [`InferenceClient`] is the only place the runner touches the network. The
//! production implementation wraps the Bedrock Runtime SDK client; tests plug
//! in stubs.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_bedrockruntime::config::Region;
use aws_sdk_bedrockruntime::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_bedrockruntime::operation::invoke_model::InvokeModelError;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client;
use tracing::debug;

use crate::config::Config;
use crate::error::InvokeError;

/// One blocking-style request/response call to a hosted model.
///
/// Any error returned here is reported as a service-layer failure.
#[async_trait]
pub trait InferenceClient: Send + Sync {
  async fn invoke_model(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, InvokeError>;
}

/// Bedrock Runtime `InvokeModel` client.
#[derive(Debug, Clone)]
pub struct BedrockClient {
  inner: Client,
  content_type: String,
  accept: String,
}

impl BedrockClient {
  /// Build from an already-resolved SDK configuration (credentials, region).
  pub fn from_sdk_config(sdk_config: &SdkConfig, config: &Config) -> Self {
    Self {
      inner: Client::new(sdk_config),
      content_type: config.content_type.clone(),
      accept: config.accept.clone(),
    }
  }

  /// Resolve credentials from the ambient AWS chain, pinned to `config.region`.
  pub async fn connect(config: &Config) -> Self {
    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
      .region(Region::new(config.region.clone()))
      .load()
      .await;
    debug!(region = %config.region, "bedrock-runtime client configured");
    Self::from_sdk_config(&sdk_config, config)
  }
}

#[async_trait]
impl InferenceClient for BedrockClient {
  async fn invoke_model(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, InvokeError> {
    let resp = self
      .inner
      .invoke_model()
      .model_id(model_id)
      .content_type(&self.content_type)
      .accept(&self.accept)
      .body(Blob::new(body))
      .send()
      .await
      .map_err(|e| InvokeError::service(describe_sdk_error(&e)))?;
    Ok(resp.body.into_inner())
  }
}

/// Service responses read like botocore's `ClientError`; transport and
/// construction failures keep the full SDK error chain.
fn describe_sdk_error(err: &SdkError<InvokeModelError>) -> String {
  match err {
    SdkError::ServiceError(ctx) => {
      let e = ctx.err();
      format!(
        "An error occurred ({}) when calling the InvokeModel operation: {}",
        e.code().unwrap_or("Unknown"),
        e.message().unwrap_or_default()
      )
    }
    other => DisplayErrorContext(other).to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn transport_error_keeps_chain() {
    let sdk_err: SdkError<InvokeModelError> = SdkError::timeout_error("deadline exceeded");
    let text = describe_sdk_error(&sdk_err);
    assert!(text.contains("deadline exceeded"), "got: {text}");
  }
}
