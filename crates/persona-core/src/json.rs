//! JSON boundary: form documents in, record documents out.

use serde::Serialize;
use serde_json::Value;

use crate::{
  Error, Result, form::PersonInForm, mapper::from_form, record::PersonRecord,
};

/// Parse one form object.
pub fn parse_form(input: &str) -> Result<PersonInForm> {
  Ok(serde_json::from_str(input)?)
}

/// Parse either a single form object or an array of them.
pub fn parse_forms(input: &str) -> Result<Vec<PersonInForm>> {
  match serde_json::from_str::<Value>(input)? {
    Value::Array(items) => items
      .into_iter()
      .map(|item| serde_json::from_value(item).map_err(Error::from))
      .collect(),
    object @ Value::Object(_) => Ok(vec![serde_json::from_value(object)?]),
    other => Err(Error::UnexpectedDocument(json_kind(&other))),
  }
}

/// A mapped document in the shape it was read: one record or a list.
///
/// Serializes straight from [`PersonRecord`], so keys keep field order
/// (`type`, `tin`, `name`, `foreign_tin`, `company_title`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MappedDocument {
  One(PersonRecord),
  Many(Vec<PersonRecord>),
}

impl MappedDocument {
  pub fn len(&self) -> usize {
    match self {
      Self::One(_) => 1,
      Self::Many(records) => records.len(),
    }
  }

  pub fn is_empty(&self) -> bool { self.len() == 0 }
}

/// Map a whole document, keeping its shape: an object yields one record
/// object, an array yields an array of records.
pub fn map_document(input: &str) -> Result<MappedDocument> {
  match serde_json::from_str::<Value>(input)? {
    Value::Array(items) => {
      let records = items
        .into_iter()
        .map(map_value)
        .collect::<Result<Vec<_>>>()?;
      Ok(MappedDocument::Many(records))
    }
    object @ Value::Object(_) => Ok(MappedDocument::One(map_value(object)?)),
    other => Err(Error::UnexpectedDocument(json_kind(&other))),
  }
}

fn map_value(value: Value) -> Result<PersonRecord> {
  let form: PersonInForm = serde_json::from_value(value)?;
  Ok(from_form(&form))
}

fn json_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}
