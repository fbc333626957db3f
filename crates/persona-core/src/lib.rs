//! Core types and the form-to-server mapper for person records.
//!
//! A person captured by the entry form carries two loose flags (foreign,
//! juridical) plus a title and a TIN. The server wants a single `type`
//! discriminant and exactly one populated slot per identity pair. This crate
//! is pure and synchronous; it performs no I/O.

pub mod error;
pub mod form;
pub mod json;
pub mod mapper;
pub mod record;


pub use error::{Error, Result};
pub use form::PersonInForm;
pub use mapper::{from_form, from_forms};
pub use record::{PersonRecord, PersonType};
