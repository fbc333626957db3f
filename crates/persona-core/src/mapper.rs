//! Form → server mapping.

use crate::{
  form::PersonInForm,
  record::{PersonRecord, PersonType},
};

/// Map a form record onto the server representation. Never fails.
///
/// The foreign flag picks between `tin` and `foreign_tin`; the juridical flag
/// picks between `name` and `company_title`. The unselected slot of each
/// pair is always `None`, the selected one carries the form value verbatim
/// (an empty string stays an empty string).
pub fn from_form(form: &PersonInForm) -> PersonRecord {
  let foreign = form.is_foreign();
  let juridical = form.is_juridical();
  let kind = PersonType::from_flags(foreign, juridical);
  tracing::trace!(%kind, "mapped person form");

  let tin = normalize(form.tin.as_deref());
  let title = normalize(form.title.as_deref());

  let (tin, foreign_tin) = if foreign { (None, tin) } else { (tin, None) };
  let (name, company_title) = if juridical {
    (None, title)
  } else {
    (title, None)
  };

  PersonRecord {
    kind,
    tin,
    name,
    foreign_tin,
    company_title,
  }
}

/// Map a batch of forms, preserving order.
pub fn from_forms(forms: &[PersonInForm]) -> Vec<PersonRecord> {
  forms.iter().map(from_form).collect()
}

/// A missing value becomes an explicit `None`; anything present, including
/// `""`, is copied through untouched.
pub fn normalize(value: Option<&str>) -> Option<String> {
  value.map(str::to_owned)
}

impl From<&PersonInForm> for PersonRecord {
  fn from(form: &PersonInForm) -> Self { from_form(form) }
}

impl From<PersonInForm> for PersonRecord {
  fn from(form: PersonInForm) -> Self { from_form(&form) }
}
