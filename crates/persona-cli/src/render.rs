//! Turning form input text into record output text.

use anyhow::Context as _;
use persona_core::{from_form, json};

use crate::settings::{CliConfig, InputFormat};

/// Map `input` according to `config` and return the text to print.
pub fn render(input: &str, config: &CliConfig) -> anyhow::Result<String> {
  match config.format {
    InputFormat::Json => render_document(input, config.pretty),
    InputFormat::Ndjson => render_lines(input),
  }
}

fn render_document(input: &str, pretty: bool) -> anyhow::Result<String> {
  let document =
    json::map_document(input).context("failed to map form document")?;
  tracing::info!(count = document.len(), "mapped form records");
  let rendered = if pretty {
    serde_json::to_string_pretty(&document)
  } else {
    serde_json::to_string(&document)
  };
  rendered.context("failed to serialise records")
}

fn render_lines(input: &str) -> anyhow::Result<String> {
  let mut out = Vec::new();
  for (index, line) in input.lines().enumerate() {
    if line.trim().is_empty() {
      continue;
    }
    let line_no = index + 1;
    let form = json::parse_form(line)
      .with_context(|| format!("invalid form on line {line_no}"))?;
    let record = from_form(&form);
    out.push(
      serde_json::to_string(&record)
        .with_context(|| format!("failed to serialise line {line_no}"))?,
    );
  }
  tracing::info!(count = out.len(), "mapped form records");
  Ok(out.join("\n"))
}
