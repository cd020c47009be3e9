//! Invoker configuration with fixed defaults.

/// Region the Bedrock Runtime client is bound to. Not derived from input.
pub const DEFAULT_REGION: &str = "ap-northeast-1";

const JSON_MIME: &str = "application/json";

/// Settings for the remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// AWS region for the `bedrock-runtime` endpoint.
  pub region: String,
  /// MIME type sent as `contentType` on InvokeModel.
  pub content_type: String,
  /// MIME type sent as `accept` on InvokeModel.
  pub accept: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      region: DEFAULT_REGION.to_string(),
      content_type: JSON_MIME.to_string(),
      accept: JSON_MIME.to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_use_fixed_region_and_json() {
    let config = Config::default();
    assert_eq!(config.region, "ap-northeast-1");
    assert_eq!(config.content_type, "application/json");
    assert_eq!(config.accept, "application/json");
  }
}
