//! Parsing of `#[validate(...)]` and `#[record(...)]` attributes

use syn::{Attribute, LitStr};

/// Validation attributes for a field.
#[derive(Debug, Default, Clone)]
pub(super) struct FieldAttrs {
    /// Rule specifications in attribute order.
    pub rules: Vec<String>,
    /// Error key override.
    pub rename: Option<String>,
}

impl FieldAttrs {
    /// Parses the `#[validate]` attributes of a field.
    ///
    /// Returns `None` if the field carries none.
    pub(super) fn from_attributes(attrs: &[Attribute]) -> syn::Result<Option<Self>> {
        let mut result = None::<Self>;

        for attr in attrs {
            if !attr.path().is_ident("validate") {
                continue;
            }

            let parsed = result.get_or_insert_with(Self::default);
            attr.parse_nested_meta(|meta| parsed.parse_meta(&meta))?;
        }

        Ok(result)
    }

    /// Rule specification passed to the registry.
    pub(super) fn spec(&self) -> String {
        self.rules
            .iter()
            .map(|rules| rules.trim())
            .filter(|rules| !rules.is_empty())
            .collect::<Vec<_>>()
            .join(",")
    }

    fn parse_meta(&mut self, meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("rules") {
            let value: LitStr = meta.value()?.parse()?;
            self.rules.push(value.value());
            return Ok(());
        }

        if meta.path.is_ident("rename") {
            let value: LitStr = meta.value()?.parse()?;
            if self.rename.is_some() {
                return Err(syn::Error::new(value.span(), "duplicate `rename`"));
            }
            self.rename = Some(value.value());
            return Ok(());
        }

        Err(meta.error("unknown validate attribute, expected `rules` or `rename`"))
    }
}

/// Struct-level attributes.
#[derive(Debug, Default, Clone, Copy)]
pub(super) struct RecordAttrs {
    /// Expose the type's `Validatable` impl.
    pub validatable: bool,
}

impl RecordAttrs {
    pub(super) fn from_attributes(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("record") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("validatable") {
                    result.validatable = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown record attribute, expected `validatable`"))
                }
            })?;
        }

        Ok(result)
    }
}
