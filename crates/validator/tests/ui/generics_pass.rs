use fieldcheck::{Record, Registry, ToValue};

#[derive(Record)]
struct Page<'a, T: ToValue> {
    #[validate(rules = "required,nested")]
    items: Vec<T>,
    #[validate(rules = "required")]
    title: &'a str,
}

#[derive(Record)]
struct Entry {
    #[validate(rules = "required")]
    label: String,
}

fn main() {
    let page = Page {
        items: vec![Entry { label: "one".into() }],
        title: "index",
    };
    assert!(Registry::standard().validate_record(&page).is_ok());
}
