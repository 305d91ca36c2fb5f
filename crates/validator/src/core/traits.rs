//! Collaborator traits: how the engine sees records and self-validating values.

use std::borrow::Cow;

use crate::core::error::RuleResult;
use crate::core::value::{ToValue, Value};

// ============================================================================
// FIELD
// ============================================================================

/// One `(name, value, rules)` tuple produced by a [`Record`].
#[derive(Debug, Clone)]
pub struct Field<'a> {
    /// Name used as the key in [`RecordErrors`](crate::RecordErrors).
    pub name: Cow<'a, str>,
    /// The field's current value.
    pub value: Value<'a>,
    /// Rule specification, e.g. `"required,min=5"`.
    pub rules: Cow<'a, str>,
}

impl<'a> Field<'a> {
    /// Creates a field tuple.
    pub fn new(
        name: impl Into<Cow<'a, str>>,
        value: Value<'a>,
        rules: impl Into<Cow<'a, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            rules: rules.into(),
        }
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// A structured value whose fields carry rule specifications.
///
/// Usually derived:
///
/// ```rust,ignore
/// use fieldcheck::Record;
///
/// #[derive(Record)]
/// struct Signup {
///     #[validate(rules = "required,min=5")]
///     name: String,
///     #[validate(rules = "required,email")]
///     email: String,
/// }
/// ```
pub trait Record {
    /// Returns the rule-carrying fields in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;

    /// Whether the record as a whole counts as absent for `required`.
    fn is_zero(&self) -> bool {
        false
    }

    /// Exposes the self-validation capability used by the `validatable` rule.
    fn as_validatable(&self) -> Option<&dyn Validatable> {
        None
    }
}

// ============================================================================
// VALIDATABLE
// ============================================================================

/// A value that knows how to validate itself.
///
/// The `validatable` rule calls this instead of walking fields, which suits
/// nested values that carry no rule specifications of their own.
pub trait Validatable {
    /// Validates the instance.
    fn validate(&self) -> RuleResult;
}

// ============================================================================
// DYNAMIC RECORD
// ============================================================================

/// A record assembled at runtime, for data without a Rust struct behind it.
///
/// ```rust
/// use fieldcheck::{DynRecord, Registry, ErrorKind};
///
/// let record = DynRecord::new()
///     .field("Name", &"Bob", "required,min=5")
///     .field("Email", &"bob@example.org", "required,email");
///
/// let errors = Registry::standard().validate_record(&record).unwrap_err();
/// assert_eq!(errors.get("Name").unwrap().kinds(), vec![ErrorKind::Min]);
/// assert!(!errors.contains("Email"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DynRecord<'a> {
    fields: Vec<Field<'a>>,
}

impl<'a> DynRecord<'a> {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Adds a field from anything convertible to a [`Value`].
    #[must_use = "builder methods must be chained or built"]
    pub fn field<T: ToValue + ?Sized>(
        mut self,
        name: impl Into<Cow<'a, str>>,
        value: &'a T,
        rules: impl Into<Cow<'a, str>>,
    ) -> Self {
        self.fields.push(Field::new(name, value.to_value(), rules));
        self
    }

    /// Adds a prepared field value.
    #[must_use = "builder methods must be chained or built"]
    pub fn value(
        mut self,
        name: impl Into<Cow<'a, str>>,
        value: Value<'a>,
        rules: impl Into<Cow<'a, str>>,
    ) -> Self {
        self.fields.push(Field::new(name, value, rules));
        self
    }

    /// Builds a record from a JSON object and a `field -> rules` table.
    ///
    /// Fields missing from the document are validated as `Null`; non-object
    /// documents yield every field as `Null`.
    pub fn from_json<I, K, R>(document: &'a serde_json::Value, rules: I) -> Self
    where
        I: IntoIterator<Item = (K, R)>,
        K: Into<Cow<'a, str>>,
        R: Into<Cow<'a, str>>,
    {
        let fields = rules
            .into_iter()
            .map(|(name, rules)| {
                let name = name.into();
                let value = document
                    .get(name.as_ref())
                    .map_or(Value::Null, Value::from_json);
                Field::new(name, value, rules)
            })
            .collect();
        Self { fields }
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Record for DynRecord<'_> {
    fn fields(&self) -> Vec<Field<'_>> {
        self.fields.clone()
    }
}

impl ToValue for DynRecord<'_> {
    fn to_value(&self) -> Value<'_> {
        Value::Record(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dyn_record_keeps_field_order() {
        let age = 36_u32;
        let record = DynRecord::new()
            .field("b", &"x", "required")
            .field("a", &age, "min=18");

        let names: Vec<_> = record.fields().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn json_record_fills_missing_fields_with_null() {
        let doc = json!({"name": "Ada"});
        let record = DynRecord::from_json(&doc, [("name", "required"), ("email", "required")]);

        let fields = record.fields();
        assert_eq!(fields.len(), 2);
        assert!(matches!(fields[0].value, Value::Text("Ada")));
        assert!(fields[1].value.is_null());
    }

    #[test]
    fn records_are_never_zero_by_default() {
        assert!(!DynRecord::new().is_zero());
        assert!(DynRecord::new().as_validatable().is_none());
    }
}
