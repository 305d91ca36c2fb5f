//! Rule registry and validation entry points
//!
//! A [`Registry`] maps rule names to rule functions. It is assembled with a
//! [`RegistryBuilder`] and immutable afterwards, so one instance can be
//! shared across threads and cloned cheaply.
//!
//! ```rust
//! use fieldcheck::{ErrorKind, Registry, Value};
//!
//! let registry = Registry::standard();
//! let errors = registry.validate_value(&Value::Text("b@tx"), "required,email,min=5").unwrap_err();
//! assert_eq!(errors.kinds(), vec![ErrorKind::Invalid, ErrorKind::Min]);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::config::ValidatorConfig;
use crate::core::{
    ErrorKind, FieldErrors, FieldResult, Record, RecordErrors, RecordResult, RuleResult, RuleSpec,
    ToValue, Value,
};
use crate::validators;

/// A registered rule: `(value, parameter, registry) -> outcome`.
///
/// The registry argument lets rules such as `nested` recurse with the same
/// rule set the caller used.
pub type RuleFn = dyn Fn(&Value<'_>, &str, &Registry) -> RuleResult + Send + Sync;

// ============================================================================
// REGISTRY
// ============================================================================

/// Immutable mapping from rule names to rule functions.
#[derive(Clone)]
pub struct Registry {
    rules: Arc<HashMap<String, Arc<RuleFn>>>,
    config: ValidatorConfig,
}

impl Registry {
    /// Starts an empty builder.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The built-in rule set: `required`, `min`, `email`, `nested`,
    /// `validatable`, plus `id` and `ref` with feature `ids`.
    #[must_use]
    pub fn standard() -> Self {
        RegistryBuilder::new().with_standard_rules().build()
    }

    /// Starts a builder holding this registry's rules and configuration.
    #[must_use]
    pub fn to_builder(&self) -> RegistryBuilder {
        RegistryBuilder {
            rules: (*self.rules).clone(),
            config: self.config.clone(),
        }
    }

    /// Looks up a rule by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<RuleFn>> {
        self.rules.get(name)
    }

    /// Returns true if a rule is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Returns the registered rule names, sorted.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    // ------------------------------------------------------------------------
    // Entry points
    // ------------------------------------------------------------------------

    /// Validates one value against a rule specification such as
    /// `"required,min=5"`.
    ///
    /// Every rule is evaluated, in order, even after a failure. A name with
    /// no registered rule contributes [`ErrorKind::Unsupported`].
    pub fn validate_value(&self, value: &Value<'_>, spec: &str) -> FieldResult {
        self.validate_rules(value, &RuleSpec::parse_with(spec, &self.config.syntax))
    }

    /// Same as [`validate_value`](Self::validate_value) for anything
    /// convertible to a [`Value`].
    pub fn validate<T: ToValue + ?Sized>(&self, value: &T, spec: &str) -> FieldResult {
        self.validate_value(&value.to_value(), spec)
    }

    /// Validates one value against a pre-parsed specification.
    pub fn validate_rules(&self, value: &Value<'_>, spec: &RuleSpec) -> FieldResult {
        let mut errors = FieldErrors::new();

        for call in spec {
            let outcome = match self.rules.get(call.name.as_str()) {
                Some(rule) => rule(value, &call.param, self),
                None => {
                    warn!(rule = %call.name, "unknown validation rule");
                    Err(ErrorKind::Unsupported.into())
                }
            };
            trace!(rule = %call.name, kind = value.kind_name(), passed = outcome.is_ok(), "rule evaluated");

            if let Err(error) = outcome {
                errors.push(error);
            }
        }

        errors.into_result()
    }

    /// Validates every field of a record against its own specification.
    ///
    /// Returns `Ok(())` when no field failed; the error never holds an empty
    /// aggregate.
    pub fn validate_record(&self, record: &dyn Record) -> RecordResult {
        let mut errors = RecordErrors::new();

        for field in record.fields() {
            trace!(field = %field.name, rules = %field.rules, "validating field");
            if let Err(field_errors) = self.validate_value(&field.value, &field.rules) {
                errors.insert(field.name.into_owned(), field_errors);
            }
        }

        errors.into_result()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("rules", &self.rule_names())
            .field("config", &self.config)
            .finish()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Assembles a [`Registry`].
///
/// Registering a name twice keeps the later rule.
///
/// ```rust
/// use fieldcheck::{ErrorKind, Registry, Value, validators::parse_int};
///
/// let registry = Registry::standard()
///     .to_builder()
///     .rule("max", |value, param| match value {
///         Value::Int(n) if *n > parse_int(param)? => Err(ErrorKind::Invalid.into()),
///         _ => Ok(()),
///     })
///     .build();
///
/// assert!(registry.validate_value(&Value::Int(11), "min=1,max=10").is_err());
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    rules: HashMap<String, Arc<RuleFn>>,
    config: ValidatorConfig,
}

impl RegistryBuilder {
    /// Creates a builder with no rules and the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Registers a `(value, parameter)` rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<F>(self, name: impl Into<String>, rule: F) -> Self
    where
        F: Fn(&Value<'_>, &str) -> RuleResult + Send + Sync + 'static,
    {
        let wrapped: Arc<RuleFn> =
            Arc::new(move |value: &Value<'_>, param: &str, _registry: &Registry| rule(value, param));
        self.insert(name.into(), wrapped)
    }

    /// Registers a rule that needs the registry, typically to recurse.
    #[must_use = "builder methods must be chained or built"]
    pub fn recursive_rule<F>(self, name: impl Into<String>, rule: F) -> Self
    where
        F: Fn(&Value<'_>, &str, &Registry) -> RuleResult + Send + Sync + 'static,
    {
        self.insert(name.into(), Arc::new(rule))
    }

    /// Registers the built-in rules.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_standard_rules(self) -> Self {
        let builder = self
            .rule("required", validators::required)
            .rule("min", validators::min)
            .rule("email", validators::email)
            .recursive_rule("nested", validators::nested)
            .rule("validatable", validators::validatable);

        #[cfg(feature = "ids")]
        let builder = builder
            .rule("id", validators::id)
            .rule("ref", validators::db_ref);

        builder
    }

    /// Returns true if a rule is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Finishes the registry.
    #[must_use]
    pub fn build(self) -> Registry {
        debug!(rules = self.rules.len(), "validation registry built");
        Registry {
            rules: Arc::new(self.rules),
            config: self.config,
        }
    }

    fn insert(mut self, name: String, rule: Arc<RuleFn>) -> Self {
        if self.rules.insert(name.clone(), rule).is_some() {
            debug!(rule = %name, "replaced validation rule");
        } else {
            debug!(rule = %name, "registered validation rule");
        }
        self
    }
}

impl fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("RegistryBuilder")
            .field("rules", &names)
            .field("config", &self.config)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
