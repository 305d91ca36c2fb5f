//! Prelude module for convenient imports.
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! let record = DynRecord::new().field("Email", &"ada@example.org", "required,email");
//! assert!(Registry::standard().validate_record(&record).is_ok());
//! ```

// The trait, and with feature `derive` the derive macro of the same name.
pub use crate::Record;
pub use crate::core::{
    DynRecord, ErrorKind, FieldErrors, FieldResult, RecordErrors, RecordResult, RuleError,
    RuleResult, RuleSpec, ToValue, Validatable, Value,
};
pub use crate::registry::{Registry, RegistryBuilder};

#[cfg(feature = "ids")]
pub use crate::ids::{DbRef, ObjectId, RefId};
