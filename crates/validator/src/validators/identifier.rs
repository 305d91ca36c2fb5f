//! Document identifier validators
//!
//! Shape checks for [`ObjectId`](crate::ids::ObjectId) and
//! [`DbRef`](crate::ids::DbRef) fields. Neither rule looks the target up.

use crate::core::{ErrorKind, RuleResult, Value};
use crate::ids::RefId;

/// Fails with [`ErrorKind::Invalid`] if an object id is not 12 bytes long.
///
/// An empty id is vacuous and passes; pair with `required` to reject it.
pub fn id(value: &Value<'_>, _param: &str) -> RuleResult {
    if value.is_vacuous() {
        return Ok(());
    }
    match value {
        Value::ObjectId(id) if !id.is_valid() => Err(ErrorKind::Invalid.into()),
        Value::ObjectId(_) => Ok(()),
        _ => Err(ErrorKind::Unsupported.into()),
    }
}

/// Fails with [`ErrorKind::Invalid`] if a reference names no collection or
/// embeds a malformed object id. Natural string and integer keys are not
/// checked.
pub fn db_ref(value: &Value<'_>, _param: &str) -> RuleResult {
    if value.is_vacuous() {
        return Ok(());
    }
    let Value::DbRef(reference) = value else {
        return Err(ErrorKind::Unsupported.into());
    };

    if let Some(RefId::ObjectId(id)) = &reference.id
        && !id.is_valid()
    {
        return Err(ErrorKind::Invalid.into());
    }
    if reference.collection.is_empty() {
        return Err(ErrorKind::Invalid.into());
    }
    Ok(())
}
