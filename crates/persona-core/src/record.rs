//! The server-facing person record and its four-way taxonomy.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::Error;

// ─── Taxonomy ────────────────────────────────────────────────────────────────

/// Domestic/foreign × physical/juridical. The snake_case tag is the `type`
/// value the server expects.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumIter,
  IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PersonType {
  Physical,
  Juridical,
  ForeignPhysical,
  ForeignJuridical,
}

impl PersonType {
  pub fn from_flags(foreign: bool, juridical: bool) -> Self {
    match (foreign, juridical) {
      (false, false) => Self::Physical,
      (false, true) => Self::Juridical,
      (true, false) => Self::ForeignPhysical,
      (true, true) => Self::ForeignJuridical,
    }
  }

  pub fn is_foreign(self) -> bool {
    matches!(self, Self::ForeignPhysical | Self::ForeignJuridical)
  }

  pub fn is_juridical(self) -> bool {
    matches!(self, Self::Juridical | Self::ForeignJuridical)
  }

  /// The wire tag, e.g. `"foreign_juridical"`.
  pub fn as_str(self) -> &'static str { self.into() }
}

impl FromStr for PersonType {
  type Err = Error;

  fn from_str(tag: &str) -> Result<Self, Self::Err> {
    Self::iter()
      .find(|kind| kind.as_str() == tag)
      .ok_or_else(|| Error::UnknownPersonType(tag.to_string()))
  }
}

// ─── PersonRecord ────────────────────────────────────────────────────────────

/// Normalized record sent to the server.
///
/// Of `tin`/`foreign_tin` only the one matching `kind` may be populated, and
/// likewise for `name`/`company_title`. Empty slots serialize as explicit
/// `null`; no key is ever omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
  #[serde(rename = "type")]
  pub kind:          PersonType,
  pub tin:           Option<String>,
  pub name:          Option<String>,
  pub foreign_tin:   Option<String>,
  pub company_title: Option<String>,
}

impl PersonRecord {
  /// The TIN from whichever slot `kind` makes active.
  pub fn active_tin(&self) -> Option<&str> {
    if self.kind.is_foreign() {
      self.foreign_tin.as_deref()
    } else {
      self.tin.as_deref()
    }
  }

  /// The name or company title, whichever `kind` makes active.
  pub fn active_title(&self) -> Option<&str> {
    if self.kind.is_juridical() {
      self.company_title.as_deref()
    } else {
      self.name.as_deref()
    }
  }

  /// Whether the inactive slot of each pair is empty.
  pub fn is_consistent(&self) -> bool {
    let inactive_tin = if self.kind.is_foreign() {
      &self.tin
    } else {
      &self.foreign_tin
    };
    let inactive_title = if self.kind.is_juridical() {
      &self.name
    } else {
      &self.company_title
    };
    inactive_tin.is_none() && inactive_title.is_none()
  }
}
