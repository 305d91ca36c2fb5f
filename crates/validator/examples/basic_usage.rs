//! Basic usage example for fieldcheck

use fieldcheck::{Record, Registry, Value};

#[derive(Record)]
struct Signup {
    #[validate(rules = "required,min=5", rename = "Name")]
    name: String,
    #[validate(rules = "required,email,min=5", rename = "Email")]
    email: String,
}

fn main() {
    let registry = Registry::standard();

    // Single values
    for input in ["ada@example.org", "ada@localhost", ""] {
        match registry.validate_value(&Value::Text(input), "required,email") {
            Ok(()) => println!("✓ {input:?} is a valid email"),
            Err(errors) => println!("✗ {input:?}: {errors}"),
        }
    }

    // Whole records
    let signup = Signup {
        name: "Bob".into(),
        email: "b@tx".into(),
    };
    match registry.validate_record(&signup) {
        Ok(()) => println!("✓ signup is valid"),
        Err(errors) => {
            for name in errors.field_names() {
                let kinds = errors.get(name).map(|e| e.kinds()).unwrap_or_default();
                println!("✗ {name}: {kinds:?}");
            }
        }
    }
}
