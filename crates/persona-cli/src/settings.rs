//! Layered CLI configuration: TOML file, then `PERSONA_*` environment
//! variables, then command-line flags.

use std::path::Path;

use anyhow::Context as _;
use serde::Deserialize;

/// How input is framed on stdin or in the input file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
  /// One JSON document: a form object or an array of them.
  #[default]
  Json,
  /// One form object per line.
  Ndjson,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
  pub pretty: bool,
  pub format: InputFormat,
}

impl CliConfig {
  /// Read `path` (if it exists) and overlay the process environment.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    Self::load_with_env(path, None)
  }

  /// Like [`CliConfig::load`], but reads `PERSONA_*` variables from `env`
  /// instead of the process environment when given.
  pub fn load_with_env(
    path: &Path,
    env: Option<config::Map<String, String>>,
  ) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("PERSONA").source(env))
      .build()
      .context("failed to read config file")?;

    settings
      .try_deserialize()
      .context("failed to deserialise CliConfig")
  }

  /// Command-line switches only ever turn options on.
  pub fn apply_flags(&mut self, ndjson: bool, pretty: bool) {
    if ndjson {
      self.format = InputFormat::Ndjson;
    }
    if pretty {
      self.pretty = true;
    }
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::TempDir;

  use super::*;

  fn write_config(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("persona.toml");
    fs::write(&path, contents).unwrap();
    (dir, path)
  }

  fn env(pairs: &[(&str, &str)]) -> Option<config::Map<String, String>> {
    Some(
      pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect(),
    )
  }

  #[test]
  fn missing_file_yields_defaults() {
    let config = CliConfig::load_with_env(
      Path::new("/nonexistent/persona.toml"),
      env(&[]),
    )
    .unwrap();
    assert!(!config.pretty);
    assert_eq!(config.format, InputFormat::Json);
  }

  #[test]
  fn toml_file_is_read() {
    let (_dir, path) = write_config("pretty = true\nformat = \"ndjson\"\n");
    let config = CliConfig::load_with_env(&path, env(&[])).unwrap();
    assert!(config.pretty);
    assert_eq!(config.format, InputFormat::Ndjson);
  }

  #[test]
  fn environment_overrides_file() {
    let (_dir, path) = write_config("pretty = false\nformat = \"json\"\n");
    let config = CliConfig::load_with_env(
      &path,
      env(&[("PERSONA_FORMAT", "ndjson"), ("PERSONA_PRETTY", "true")]),
    )
    .unwrap();
    assert!(config.pretty);
    assert_eq!(config.format, InputFormat::Ndjson);
  }

  #[test]
  fn unrelated_variables_are_ignored() {
    let config = CliConfig::load_with_env(
      Path::new("/nonexistent/persona.toml"),
      env(&[("HOME", "/root"), ("FORMAT", "ndjson")]),
    )
    .unwrap();
    assert_eq!(config.format, InputFormat::Json);
  }

  #[test]
  fn bad_format_value_is_an_error() {
    let (_dir, path) = write_config("format = \"xml\"\n");
    assert!(CliConfig::load_with_env(&path, env(&[])).is_err());
  }

  #[test]
  fn flags_override_config() {
    let mut config = CliConfig::default();
    config.apply_flags(true, true);
    assert!(config.pretty);
    assert_eq!(config.format, InputFormat::Ndjson);
  }

  #[test]
  fn unset_flags_keep_config() {
    let mut config = CliConfig {
      pretty: true,
      format: InputFormat::Ndjson,
    };
    config.apply_flags(false, false);
    assert!(config.pretty);
    assert_eq!(config.format, InputFormat::Ndjson);
  }

  #[test]
  fn format_parses_lowercase() {
    let format: InputFormat = serde_json::from_str("\"ndjson\"").unwrap();
    assert_eq!(format, InputFormat::Ndjson);
  }
}
