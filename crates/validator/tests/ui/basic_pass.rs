use fieldcheck::{ErrorKind, Record, Registry};

#[derive(Record)]
struct Signup {
    #[validate(rules = "required,min=5", rename = "Name")]
    name: String,
    #[validate(rules = "required")]
    #[validate(rules = "email")]
    email: String,
    #[validate(rules = "min=18")]
    r#age: u32,
    notes: Vec<String>,
}

fn main() {
    let signup = Signup {
        name: "Bob".into(),
        email: "bob@example.org".into(),
        age: 30,
        notes: Vec::new(),
    };
    let errors = Registry::standard().validate_record(&signup).unwrap_err();
    assert_eq!(errors.get("Name").unwrap().kinds(), vec![ErrorKind::Min]);
    assert!(!errors.contains("email"));
    assert!(!errors.contains("age"));
    assert!(signup.notes.is_empty());
}
