use fieldcheck::{ErrorKind, Record, Registry, RuleResult, Validatable};

#[derive(Record)]
#[record(validatable)]
struct Window {
    #[validate(rules = "min=0")]
    start: i64,
    end: i64,
}

impl Validatable for Window {
    fn validate(&self) -> RuleResult {
        if self.start <= self.end {
            Ok(())
        } else {
            Err(ErrorKind::Invalid.into())
        }
    }
}

fn main() {
    let window = Window { start: 4, end: 2 };
    let errors = Registry::standard().validate(&window, "validatable").unwrap_err();
    assert_eq!(errors.kinds(), vec![ErrorKind::Invalid]);
}
