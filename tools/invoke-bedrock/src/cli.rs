//! Command-line gate: exactly `<model_id> <input.json> <output.json>`.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::types::Invocation;

pub const USAGE: &str = "Usage: invoke-bedrock <model_id> <input.json> <output.json>";

/// Three positionals, no flags. Values starting with `-` are taken literally.
#[derive(Debug, Parser)]
#[command(
  name = "invoke-bedrock",
  disable_help_flag = true,
  disable_version_flag = true,
  disable_help_subcommand = true
)]
struct Args {
  #[arg(allow_hyphen_values = true)]
  model_id: String,
  #[arg(allow_hyphen_values = true)]
  input: PathBuf,
  #[arg(allow_hyphen_values = true)]
  output: PathBuf,
}

/// Parse the full argv (program name first). `None` means print [`USAGE`].
pub fn parse<I, T>(argv: I) -> Option<Invocation>
where
  I: IntoIterator<Item = T>,
  T: Into<OsString> + Clone,
{
  let args = Args::try_parse_from(argv).ok()?;
  Some(Invocation {
    model_id: args.model_id,
    input: args.input,
    output: args.output,
  })
}
