//! Error types for validation failures
//!
//! Three layers, innermost first:
//!
//! - [`ErrorKind`]: the closed taxonomy a primitive rule reports.
//! - [`RuleError`]: what one rule invocation produced. Primitive rules only
//!   ever produce [`RuleError::Kind`]; the recursive rules wrap whole
//!   aggregates.
//! - [`FieldErrors`] / [`RecordErrors`]: the per-field and per-record
//!   aggregates handed back to callers.
//!
//! The `Display` output of the aggregates is a single line naming one failure.
//! It is lossy on purpose: reporting surfaces that show one message at a time
//! render it, everything else inspects the aggregate itself.

use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;

use serde::{Serialize, Serializer};

// ============================================================================
// RESULT ALIASES
// ============================================================================

/// Outcome of one rule invocation: `Ok(())` is a pass.
pub type RuleResult = Result<(), RuleError>;

/// Outcome of validating one value against a rule specification.
pub type FieldResult = Result<(), FieldErrors>;

/// Outcome of validating a whole record.
pub type RecordResult = Result<(), RecordErrors>;

// ============================================================================
// ERROR KIND
// ============================================================================

/// The closed set of outcomes a primitive rule can report.
///
/// `ZeroValue`, `Invalid` and `Min` are semantic failures: the value is
/// well-typed but violates the rule. `Unsupported` and `BadParameter` are
/// structural: the rule cannot be applied at all. Both classes aggregate the
/// same way; use [`ErrorKind::is_structural`] when reporting needs to tell
/// them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ErrorKind {
    /// A required value is absent or equal to its type's zero value.
    #[error("zero value")]
    ZeroValue,
    /// The value is present but fails the rule's semantic check.
    #[error("invalid value")]
    Invalid,
    /// The value (or its length) is below the configured minimum.
    #[error("less than min")]
    Min,
    /// The rule does not apply to values of this shape.
    #[error("unsupported type")]
    Unsupported,
    /// The rule's parameter string is malformed.
    #[error("bad parameter")]
    BadParameter,
}

impl ErrorKind {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ZeroValue => "zero_value",
            Self::Invalid => "invalid",
            Self::Min => "min",
            Self::Unsupported => "unsupported",
            Self::BadParameter => "bad_parameter",
        }
    }

    /// Returns true for errors that mean "rule not applicable" rather than
    /// "value rejected".
    #[must_use]
    pub const fn is_structural(self) -> bool {
        matches!(self, Self::Unsupported | Self::BadParameter)
    }
}

impl Serialize for ErrorKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

// ============================================================================
// RULE ERROR
// ============================================================================

/// The failure produced by a single rule invocation.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize)]
#[serde(untagged)]
pub enum RuleError {
    /// A primitive rule outcome.
    #[error(transparent)]
    Kind(#[from] ErrorKind),

    /// A nested record failed validation.
    #[error(transparent)]
    Record(#[from] RecordErrors),

    /// Elements of a sequence failed, in element order. Passing elements
    /// leave no entry.
    #[error("{}", first_message(.0))]
    Elements(Vec<RuleError>),
}

impl RuleError {
    /// Returns the primitive kind, if this is one.
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Kind(kind) => Some(*kind),
            _ => None,
        }
    }

    /// Returns true if this is a structural primitive error.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        self.kind().is_some_and(ErrorKind::is_structural)
    }

    /// Returns true if `self` is exactly the primitive `kind`.
    #[must_use]
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind() == Some(kind)
    }
}

fn first_message(errors: &[RuleError]) -> String {
    errors.first().map(ToString::to_string).unwrap_or_default()
}

// ============================================================================
// FIELD ERRORS
// ============================================================================

/// The ordered failures of one field, in rule-evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: Vec<RuleError>,
}

impl FieldErrors {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Returns a new sequence with `error` appended.
    ///
    /// `self` is left untouched, so several accumulations can start from the
    /// same base without interfering.
    #[must_use = "append returns a new sequence"]
    pub fn append(&self, error: impl Into<RuleError>) -> Self {
        let mut errors = self.errors.clone();
        errors.push(error.into());
        Self { errors }
    }

    /// Appends in place while building a fresh sequence.
    pub fn push(&mut self, error: impl Into<RuleError>) {
        self.errors.push(error.into());
    }

    /// Returns the number of failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if there are no failures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the first failure.
    #[must_use]
    pub fn first(&self) -> Option<&RuleError> {
        self.errors.first()
    }

    /// Returns all failures.
    #[must_use]
    pub fn as_slice(&self) -> &[RuleError] {
        &self.errors
    }

    /// Iterates over the failures in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, RuleError> {
        self.errors.iter()
    }

    /// Returns the primitive kinds in order, skipping nested aggregates.
    #[must_use]
    pub fn kinds(&self) -> Vec<ErrorKind> {
        self.errors.iter().filter_map(RuleError::kind).collect()
    }

    /// Consumes the sequence and returns the inner vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<RuleError> {
        self.errors
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<Vec<RuleError>> for FieldErrors {
    fn from(errors: Vec<RuleError>) -> Self {
        Self { errors }
    }
}

impl FromIterator<RuleError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = RuleError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<ErrorKind> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = ErrorKind>>(iter: I) -> Self {
        iter.into_iter().map(RuleError::Kind).collect()
    }
}

impl IntoIterator for FieldErrors {
    type Item = RuleError;
    type IntoIter = std::vec::IntoIter<RuleError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a RuleError;
    type IntoIter = std::slice::Iter<'a, RuleError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Renders the first failure only, or nothing.
impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.first() {
            Some(first) => write!(f, "{first}"),
            None => Ok(()),
        }
    }
}

impl std::error::Error for FieldErrors {}

// ============================================================================
// RECORD ERRORS
// ============================================================================

/// Failures of a record, keyed by field name.
///
/// A field is present only if it failed at least one rule. Iteration order
/// across fields is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecordErrors {
    fields: HashMap<String, FieldErrors>,
}

impl RecordErrors {
    /// Creates an empty aggregate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Records the failures of `field`. Empty sequences are ignored.
    pub fn insert(&mut self, field: impl Into<String>, errors: FieldErrors) {
        if !errors.is_empty() {
            self.fields.insert(field.into(), errors);
        }
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, field: impl Into<String>, errors: FieldErrors) -> Self {
        self.insert(field, errors);
        self
    }

    /// Returns the failures of `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldErrors> {
        self.fields.get(field)
    }

    /// Returns true if `field` failed.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns the number of failed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the failed field names, sorted.
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterates over `(field, failures)` pairs in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, FieldErrors> {
        self.fields.iter()
    }

    /// Consumes the aggregate and returns the underlying map.
    #[must_use]
    pub fn into_map(self) -> HashMap<String, FieldErrors> {
        self.fields
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), RecordErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl<K: Into<String>> FromIterator<(K, FieldErrors)> for RecordErrors {
    fn from_iter<I: IntoIterator<Item = (K, FieldErrors)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (field, field_errors) in iter {
            errors.insert(field, field_errors);
        }
        errors
    }
}

impl IntoIterator for RecordErrors {
    type Item = (String, FieldErrors);
    type IntoIter = hash_map::IntoIter<String, FieldErrors>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Renders `"<field> has <first failure>"` for one arbitrary field.
impl fmt::Display for RecordErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fields.iter().next() {
            Some((field, errors)) => write!(f, "{field} has {errors}"),
            None => Ok(()),
        }
    }
}

impl std::error::Error for RecordErrors {}

// ============================================================================
// TESTS
// ============================================================================
