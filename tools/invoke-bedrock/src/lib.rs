//! Bedrock model invoker: one JSON file in, one model call, one JSON file out.
//!
//! The binary prints a single status line on stdout; the library exposes the
//! runner and the client seam so the flow can be driven with a stub model.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod runner;
pub mod types;

pub use client::{BedrockClient, InferenceClient};
pub use config::Config;
pub use error::{FailureKind, InvokeError};
pub use runner::InvocationRunner;
pub use types::{Invocation, Outcome};
