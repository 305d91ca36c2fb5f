//! Core validation types and traits
//!
//! - **Values**: [`Value`], [`ToValue`]
//! - **Collaborators**: [`Record`], [`Validatable`], [`DynRecord`]
//! - **Errors**: [`ErrorKind`], [`RuleError`], [`FieldErrors`], [`RecordErrors`]
//! - **Specifications**: [`RuleSpec`], [`RuleCall`]

pub mod error;
pub mod spec;
pub mod traits;
pub mod value;

pub use error::{
    ErrorKind, FieldErrors, FieldResult, RecordErrors, RecordResult, RuleError, RuleResult,
};
pub use spec::{RuleCall, RuleSpec};
pub use traits::{DynRecord, Field, Record, Validatable};
pub use value::{ToValue, Value};
