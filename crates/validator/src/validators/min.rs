//! Lower bound check
//!
//! `min=N` bounds the length of text, lists and maps, and the numeric value
//! of integers. Text length counts Unicode scalar values, not bytes, so
//! `"ü"` has length 1 even though it is two bytes of UTF-8. For ASCII input
//! both measures agree.

use crate::core::{ErrorKind, RuleResult, Value};

/// Fails with [`ErrorKind::Min`] if the value (or its length) is below the
/// bound given as parameter.
///
/// Vacuous values pass without looking at the parameter. For everything else
/// the parameter is parsed first, and only for shapes the rule supports:
/// `min=abc` on a float still reports `Unsupported`, not `BadParameter`.
pub fn min(value: &Value<'_>, param: &str) -> RuleResult {
    if value.is_vacuous() {
        return Ok(());
    }

    let below = match value {
        Value::Text(_) | Value::List(_) | Value::Map(_) => {
            let bound = parse_int(param)?;
            let len = value.len().unwrap_or_default();
            i64::try_from(len).is_ok_and(|len| len < bound)
        }
        Value::Int(n) => *n < parse_int(param)?,
        Value::Uint(n) => {
            let bound = parse_int(param)?;
            u64::try_from(bound).is_ok_and(|bound| *n < bound)
        }
        _ => return Err(ErrorKind::Unsupported.into()),
    };

    if below {
        Err(ErrorKind::Min.into())
    } else {
        Ok(())
    }
}

/// Parses an integer parameter.
///
/// Accepts an optional sign followed by decimal digits, or a `0x`, `0o`,
/// `0b` prefixed literal. A leading `0` followed by more digits is octal.
/// Digit separators and surrounding whitespace are rejected.
pub fn parse_int(param: &str) -> Result<i64, ErrorKind> {
    let (sign, rest) = match param.as_bytes().first() {
        Some(b'-') => ("-", &param[1..]),
        Some(b'+') => ("", &param[1..]),
        _ => ("", param),
    };

    let lower = rest.to_ascii_lowercase();
    let (radix, digits) = if let Some(hex) = lower.strip_prefix("0x") {
        (16, hex)
    } else if let Some(oct) = lower.strip_prefix("0o") {
        (8, oct)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        (2, bin)
    } else if lower.len() > 1 && lower.starts_with('0') {
        (8, &lower[1..])
    } else {
        (10, lower.as_str())
    };

    // from_str_radix tolerates its own sign; a second one must not slip in.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(ErrorKind::BadParameter);
    }

    i64::from_str_radix(&format!("{sign}{digits}"), radix).map_err(|_| ErrorKind::BadParameter)
}
