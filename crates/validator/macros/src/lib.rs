//! Procedural macros for fieldcheck
//!
//! - **`#[derive(Record)]`** - exposes a struct's rule-tagged fields to the
//!   validation registry
//!
//! Use the re-export `fieldcheck::Record` rather than depending on this
//! crate directly.

use proc_macro::TokenStream;

mod record;

// ============================================================================
// RECORD DERIVE
// ============================================================================

/// Derives `fieldcheck::Record` and `fieldcheck::ToValue` for a struct.
///
/// # Attributes
///
/// ## Field
///
/// - `#[validate(rules = "required,min=5")]` - rule specification
/// - `#[validate(rename = "Name")]` - key used in `RecordErrors`, defaults to
///   the field name
///
/// Fields without `#[validate]` are not validated. Repeated `rules` are
/// joined in order, so the two forms below are equivalent:
///
/// ```rust,ignore
/// #[validate(rules = "required,min=5")]
/// name: String,
///
/// #[validate(rules = "required")]
/// #[validate(rules = "min=5")]
/// name: String,
/// ```
///
/// ## Struct
///
/// - `#[record(validatable)]` - hand the type's `Validatable` impl to the
///   `validatable` rule
///
/// Every tagged field type must implement `fieldcheck::ToValue`. Records do,
/// so records nest:
///
/// ```rust,ignore
/// use fieldcheck::Record;
///
/// #[derive(Record)]
/// struct Item {
///     #[validate(rules = "required", rename = "Name")]
///     name: String,
/// }
///
/// #[derive(Record)]
/// struct Order {
///     #[validate(rules = "required,nested")]
///     items: Vec<Item>,
/// }
/// ```
#[proc_macro_derive(Record, attributes(validate, record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record_impl(input)
}
