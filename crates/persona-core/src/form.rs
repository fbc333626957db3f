//! The person record as the entry form produces it.
//!
//! Every field is optional. The two flags are tri-state (`true`, `false`,
//! missing) and only a literal `true` switches a branch on.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Raw form input. JSON keys are camelCase (`isForeign`, `isJuridical`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonInForm {
  #[serde(default, deserialize_with = "lenient_flag")]
  pub is_foreign:   Option<bool>,
  #[serde(default, deserialize_with = "lenient_flag")]
  pub is_juridical: Option<bool>,
  /// Full name for a physical person, company name for a juridical one.
  #[serde(default)]
  pub title:        Option<String>,
  /// Domestic or foreign taxpayer identification number.
  #[serde(default)]
  pub tin:          Option<String>,
}

impl PersonInForm {
  /// An empty form: domestic, physical, no title, no TIN.
  pub fn new() -> Self { Self::default() }

  pub fn foreign(mut self, foreign: bool) -> Self {
    self.is_foreign = Some(foreign);
    self
  }

  pub fn juridical(mut self, juridical: bool) -> Self {
    self.is_juridical = Some(juridical);
    self
  }

  pub fn title(mut self, title: impl Into<String>) -> Self {
    self.title = Some(title.into());
    self
  }

  pub fn tin(mut self, tin: impl Into<String>) -> Self {
    self.tin = Some(tin.into());
    self
  }

  /// `true` only when the flag is literally `true`.
  pub fn is_foreign(&self) -> bool { self.is_foreign == Some(true) }

  /// `true` only when the flag is literally `true`.
  pub fn is_juridical(&self) -> bool { self.is_juridical == Some(true) }
}

/// Accepts any JSON value for a flag. Booleans pass through, everything else
/// (null, `"true"`, `1`, ...) collapses to `None`.
fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Value::deserialize(deserializer)?;
  Ok(match value {
    Value::Bool(flag) => Some(flag),
    Value::Null => None,
    other => {
      tracing::debug!(value = %other, "ignoring non-boolean form flag");
      None
    }
  })
}
