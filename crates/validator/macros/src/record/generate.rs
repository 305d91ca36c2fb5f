//! Code generation for the Record derive

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields};

use super::parse::{FieldAttrs, RecordAttrs};

/// Generates the `Record` and `ToValue` impls for a struct.
///
/// # Errors
///
/// Returns an error if the input is not a struct with named fields or an
/// attribute is malformed.
pub(super) fn generate_record(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            name,
            "Record can only be derived for structs with named fields",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &data.fields,
            "Record can only be derived for structs with named fields",
        ));
    };

    let record_attrs = RecordAttrs::from_attributes(&input.attrs)?;

    let mut entries = Vec::new();
    for field in &fields.named {
        let Some(attrs) = FieldAttrs::from_attributes(&field.attrs)? else {
            continue;
        };
        let Some(ident) = &field.ident else {
            continue;
        };

        let key = attrs
            .rename
            .clone()
            .unwrap_or_else(|| ident.unraw().to_string());
        let spec = attrs.spec();

        entries.push(quote! {
            ::fieldcheck::Field::new(
                #key,
                ::fieldcheck::ToValue::to_value(&self.#ident),
                #spec,
            )
        });
    }

    let as_validatable = record_attrs.validatable.then(|| {
        quote! {
            fn as_validatable(&self) -> ::core::option::Option<&dyn ::fieldcheck::Validatable> {
                ::core::option::Option::Some(self)
            }
        }
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::fieldcheck::Record for #name #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<::fieldcheck::Field<'_>> {
                ::std::vec![#(#entries),*]
            }

            #as_validatable
        }

        #[automatically_derived]
        impl #impl_generics ::fieldcheck::ToValue for #name #ty_generics #where_clause {
            fn to_value(&self) -> ::fieldcheck::Value<'_> {
                ::fieldcheck::Value::Record(self)
            }
        }
    })
}
