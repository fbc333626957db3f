//! `persona` — map person form records into server records.
//!
//! # Usage
//!
//! ```
//! echo '{"isForeign":true,"title":"John Dod","tin":"123"}' | persona
//! persona --input forms.ndjson --ndjson
//! persona --config persona.toml --input forms.json --pretty
//! ```

mod render;
mod settings;

use std::{
  io::{self, Read, Write},
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use settings::CliConfig;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
  name = "persona",
  version,
  about = "Map person form records into server records"
)]
struct Args {
  /// Path to a TOML config file (pretty, format).
  #[arg(short, long, value_name = "FILE", default_value = "persona.toml")]
  config: PathBuf,

  /// Input file; `-` or omitted reads stdin.
  #[arg(short, long, value_name = "FILE")]
  input: Option<PathBuf>,

  /// Treat input as newline-delimited JSON, one form per line.
  #[arg(long)]
  ndjson: bool,

  /// Pretty-print JSON output.
  #[arg(long)]
  pretty: bool,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let mut config = CliConfig::load(&args.config)?;
  config.apply_flags(args.ndjson, args.pretty);
  tracing::debug!(?config, "resolved configuration");

  let input = read_input(args.input.as_ref())?;
  let output = render::render(&input, &config)?;

  let mut stdout = io::stdout().lock();
  writeln!(stdout, "{output}").context("failed to write output")?;
  Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
  match path {
    Some(path) if !reads_stdin(path) => std::fs::read_to_string(path)
      .with_context(|| format!("failed to read {path:?}")),
    _ => read_from(io::stdin().lock()),
  }
}

/// `-` is the conventional spelling for stdin.
fn reads_stdin(path: &Path) -> bool { path.as_os_str() == "-" }

fn read_from(mut reader: impl Read) -> Result<String> {
  let mut buf = String::new();
  reader
    .read_to_string(&mut buf)
    .context("failed to read stdin")?;
  Ok(buf)
}
