//! Presence check
//!
//! `required` is the only rule that rejects absent values. Every other
//! built-in rule passes them, so presence and shape are checked separately:
//! `"email"` accepts an empty string, `"required,email"` does not.

use crate::core::{ErrorKind, RuleResult, Value};

/// Fails with [`ErrorKind::ZeroValue`] if the value is absent or equal to
/// its type's zero value. See [`Value::is_vacuous`] for the exact table.
pub fn required(value: &Value<'_>, _param: &str) -> RuleResult {
    if value.is_vacuous() {
        Err(ErrorKind::ZeroValue.into())
    } else {
        Ok(())
    }
}
