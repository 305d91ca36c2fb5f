//! # fieldcheck
//!
//! Declarative field validation driven by rule strings.
//!
//! Fields carry a rule specification such as `"required,min=5"`; a
//! [`Registry`] evaluates every rule of every field and collects failures per
//! field into [`RecordErrors`].
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcheck::{ErrorKind, Record, Registry};
//!
//! #[derive(Record)]
//! struct Signup {
//!     #[validate(rules = "required,min=5", rename = "Name")]
//!     name: String,
//!     #[validate(rules = "required,email,min=5", rename = "Email")]
//!     email: String,
//! }
//!
//! let signup = Signup { name: "Bob".into(), email: "b@tx".into() };
//! let errors = Registry::standard().validate_record(&signup).unwrap_err();
//!
//! assert_eq!(errors.get("Name").unwrap().kinds(), vec![ErrorKind::Min]);
//! assert_eq!(errors.get("Email").unwrap().kinds(), vec![ErrorKind::Invalid, ErrorKind::Min]);
//! ```
//!
//! ## Built-in Rules
//!
//! - `required`: rejects absent and zero values
//! - `min=N`: lower bound on length (text, lists, maps) or on integers
//! - `email`: a single email address with a dotted domain
//! - `nested`: validates a record field, or a list of records, recursively
//! - `validatable`: calls [`Validatable::validate`] on a value or list elements
//! - `id`, `ref`: shape of [`ObjectId`] and [`DbRef`] fields (feature `ids`)
//!
//! Every rule except `required` passes absent values; combine them to demand
//! presence. More rules can be added with [`RegistryBuilder::rule`].
//!
//! ## Features
//!
//! - `derive` (default): `#[derive(Record)]`
//! - `ids` (default): identifier types and the `id` / `ref` rules

// Lets `#[derive(Record)]` expansions name `::fieldcheck` inside this crate.
extern crate self as fieldcheck;

pub mod config;
pub mod core;
#[cfg(feature = "ids")]
pub mod ids;
pub mod prelude;
pub mod registry;
pub mod validators;

pub use crate::config::{SpecSyntax, ValidatorConfig};
pub use crate::core::{
    DynRecord, ErrorKind, Field, FieldErrors, FieldResult, Record, RecordErrors, RecordResult,
    RuleCall, RuleError, RuleResult, RuleSpec, ToValue, Validatable, Value,
};
#[cfg(feature = "ids")]
pub use crate::ids::{DbRef, ObjectId, ObjectIdError, RefId};
pub use crate::registry::{Registry, RegistryBuilder, RuleFn};

/// Derives [`Record`] and [`ToValue`] for a struct with named fields.
///
/// Field attributes:
///
/// - `#[validate(rules = "...")]`: the rule specification; fields without it
///   are not validated
/// - `#[validate(rename = "...")]`: the key used in [`RecordErrors`]
///
/// Struct attribute `#[record(validatable)]` exposes the type's
/// [`Validatable`] impl to the `validatable` rule.
#[cfg(feature = "derive")]
pub use fieldcheck_macros::Record;
