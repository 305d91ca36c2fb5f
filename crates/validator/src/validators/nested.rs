//! Nested validators
//!
//! Two rules descend into a field's value instead of inspecting it:
//!
//! - [`nested`] walks the fields of a [`Record`](crate::Record) (or of every
//!   record in a list) through the registry, keeping per-field attribution.
//! - [`validatable`] asks a value to validate itself through
//!   [`Validatable`](crate::Validatable), for types that carry no field rules.

use crate::core::{ErrorKind, RuleError, RuleResult, Value};
use crate::registry::Registry;

// ============================================================================
// NESTED
// ============================================================================

/// Validates a record field, or each record of a list field, with the rules
/// declared on the nested record's own fields.
///
/// Vacuous values pass, and so do `Null` list elements. List elements that
/// are not records each contribute [`ErrorKind::Unsupported`]; so does any
/// other shape of the field itself. Failures of a list are reported in element
/// order as [`RuleError::Elements`], passing elements leave no entry.
pub fn nested(value: &Value<'_>, _param: &str, registry: &Registry) -> RuleResult {
    if value.is_vacuous() {
        return Ok(());
    }
    match value {
        Value::Record(record) => registry.validate_record(*record).map_err(RuleError::Record),
        Value::List(items) => {
            let failures: Vec<RuleError> = items
                .iter()
                .filter_map(|item| match item {
                    Value::Null => None,
                    Value::Record(record) => {
                        registry.validate_record(*record).err().map(RuleError::Record)
                    }
                    _ => Some(ErrorKind::Unsupported.into()),
                })
                .collect();
            elements(failures)
        }
        _ => Err(ErrorKind::Unsupported.into()),
    }
}

// ============================================================================
// VALIDATABLE
// ============================================================================

/// Calls the self-validation capability of a value, or of each list element.
///
/// Values and elements without the capability are skipped, so a list of
/// plain scalars passes. A single failing value returns its own error
/// unchanged; list failures are wrapped in [`RuleError::Elements`].
pub fn validatable(value: &Value<'_>, _param: &str) -> RuleResult {
    match value {
        Value::List(items) => {
            let failures: Vec<RuleError> = items
                .iter()
                .filter_map(Value::as_validatable)
                .filter_map(|item| item.validate().err())
                .collect();
            elements(failures)
        }
        other => other.as_validatable().map_or(Ok(()), |item| item.validate()),
    }
}

fn elements(failures: Vec<RuleError>) -> RuleResult {
    if failures.is_empty() {
        Ok(())
    } else {
        Err(RuleError::Elements(failures))
    }
}

// ============================================================================
// TESTS
// ============================================================================
