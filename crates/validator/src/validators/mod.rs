//! Built-in rules
//!
//! Every rule is a plain function `(value, parameter) -> RuleResult`, except
//! [`nested`] which also receives the registry to recurse with. The standard
//! [`Registry`](crate::Registry) binds them to these names:
//!
//! | name          | function                  |
//! |---------------|---------------------------|
//! | `required`    | [`required`]              |
//! | `min`         | [`min`](fn@min)           |
//! | `email`       | [`email`](fn@email)       |
//! | `nested`      | [`nested`](fn@nested)     |
//! | `validatable` | [`validatable`]           |
//! | `id`          | [`id`] (feature `ids`)    |
//! | `ref`         | [`db_ref`] (feature `ids`)|
//!
//! All rules except `required` pass vacuous values, so `"min=5"` on an empty
//! string is a pass and `"required,min=5"` is a failure.

pub mod email;
#[cfg(feature = "ids")]
pub mod identifier;
pub mod min;
pub mod nested;
pub mod required;

pub use email::email;
#[cfg(feature = "ids")]
pub use identifier::{db_ref, id};
pub use min::{min, parse_int};
pub use nested::{nested, validatable};
pub use required::required;
