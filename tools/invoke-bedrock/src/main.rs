//! Binary entrypoint: `invoke-bedrock <model_id> <input.json> <output.json>`.
//!
//! Stdout carries exactly one line: the usage text, or the JSON status line.
//! Diagnostics go to stderr through `tracing` (`RUST_LOG`, default `warn`).

use std::io::{self, Write};

use invoke_bedrock::format::to_status_line;
use invoke_bedrock::{cli, runner, BedrockClient, Config};
use tracing_subscriber::EnvFilter;

fn main() {
  let invocation = match cli::parse(std::env::args_os()) {
    Some(inv) => inv,
    None => {
      println!("{}", cli::USAGE);
      std::process::exit(1);
    }
  };

  init_logging();

  let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
    Ok(rt) => rt,
    Err(e) => {
      let _ = writeln!(io::stderr(), "invoke-bedrock: runtime: {}", e);
      std::process::exit(1);
    }
  };

  let config = Config::default();
  let outcome = rt.block_on(runner::run_connecting(&invocation, || {
    BedrockClient::connect(&config)
  }));

  let mut out = io::stdout().lock();
  match to_status_line(&outcome) {
    Ok(line) => {
      let _ = writeln!(out, "{}", line);
    }
    Err(e) => {
      let _ = writeln!(io::stderr(), "invoke-bedrock: status line: {}", e);
    }
  }
  let _ = out.flush();
  std::process::exit(outcome.exit_code());
}

fn init_logging() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .with_target(false)
    .init();
}
