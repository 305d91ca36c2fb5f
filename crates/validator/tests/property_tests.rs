//! Property-based tests for fieldcheck.

use fieldcheck::prelude::*;
use proptest::prelude::*;

fn rule_names() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("min"), Just("email"), Just("nested"), Just("validatable")]
}

fn vacuous_values() -> impl Strategy<Value = Value<'static>> {
    prop_oneof![
        Just(Value::Null),
        Just(Value::Text("")),
        Just(Value::Int(0)),
        Just(Value::Uint(0)),
        Just(Value::Bool(false)),
        Just(Value::List(Vec::new())),
        Just(Value::Map(Vec::new())),
    ]
}

// ============================================================================
// VACUITY: only `required` rejects absent values
// ============================================================================

proptest! {
    #[test]
    fn vacuous_values_pass_every_rule_but_required(
        value in vacuous_values(),
        rule in rule_names(),
        param in "[a-z0-9=,-]{0,8}",
    ) {
        let registry = Registry::standard();
        let spec = RuleSpec::default().with(rule, param);
        prop_assert!(registry.validate_rules(&value, &spec).is_ok());
    }

    #[test]
    fn required_rejects_every_vacuous_value(value in vacuous_values()) {
        let registry = Registry::standard();
        let errors = registry.validate_value(&value, "required").unwrap_err();
        prop_assert_eq!(errors.kinds(), vec![ErrorKind::ZeroValue]);
    }
}

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn validate_value_idempotent(s in ".{0,40}", spec in "(required|email|min=[0-9]{1,2}|bogus)(,(required|email|min=[0-9]{1,2}|bogus)){0,3}") {
        let registry = Registry::standard();
        let r1 = registry.validate(&s, &spec);
        let r2 = registry.validate(&s, &spec);
        prop_assert_eq!(r1, r2);
    }

    #[test]
    fn validate_record_idempotent(name in ".{0,12}", email in ".{0,20}") {
        let registry = Registry::standard();
        let record = DynRecord::new()
            .field("Name", &name, "required,min=5")
            .field("Email", &email, "required,email,min=5");

        prop_assert_eq!(registry.validate_record(&record), registry.validate_record(&record));
    }
}

// ============================================================================
// MIN: agrees with a direct length comparison
// ============================================================================

proptest! {
    #[test]
    fn min_matches_char_count(s in "\\PC{1,20}", bound in 0_i64..25) {
        let registry = Registry::standard();
        let outcome = registry.validate(&s, &format!("min={bound}"));
        let expected_ok = (s.chars().count() as i64) >= bound;
        prop_assert_eq!(outcome.is_ok(), expected_ok);
    }

    #[test]
    fn min_matches_integer_comparison(n in any::<i64>().prop_filter("non-zero", |n| *n != 0), bound in any::<i64>()) {
        let registry = Registry::standard();
        let outcome = registry.validate(&n, &format!("min={bound}"));
        prop_assert_eq!(outcome.is_ok(), n >= bound);
    }
}

// ============================================================================
// AGGREGATION: one entry per failing rule, in order
// ============================================================================

proptest! {
    #[test]
    fn field_errors_never_exceed_rule_count(s in ".{0,10}", count in 1_usize..6) {
        let registry = Registry::standard();
        let spec = vec!["email"; count].join(",");
        match registry.validate(&s, &spec) {
            Ok(()) => {}
            Err(errors) => {
                prop_assert!(!errors.is_empty());
                prop_assert_eq!(errors.len(), count);
            }
        }
    }
}
