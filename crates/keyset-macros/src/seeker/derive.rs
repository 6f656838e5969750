//! Implementation of the `#[derive(Seekable)]` macro.
//!
//! This macro generates an implementation of the `Seekable` trait that maps
//! record-side field names to the struct's fields. Field values are converted
//! with `bson::to_bson`; a conversion failure is an error, never an absent
//! field.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::parse_seek_attrs;

/// Main implementation of the Seekable derive macro.
pub fn seekable_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;

    // Ensure we have a struct with named fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Seekable can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Seekable can only be derived for structs",
            ))
        }
    };

    let mut field_matches: Vec<TokenStream> = Vec::new();
    let mut seen: Vec<String> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let seek_attrs = parse_seek_attrs(&field.attrs)?;
        if seek_attrs.skip {
            continue;
        }

        let record_name = seek_attrs
            .rename
            .unwrap_or_else(|| to_upper_camel_case(&field_name.to_string()));

        if seen.contains(&record_name) {
            return Err(Error::new(
                field.span(),
                format!("duplicate seekable field name '{}'", record_name),
            ));
        }
        seen.push(record_name.clone());

        field_matches.push(quote! {
            #record_name => ::keyset::bson::to_bson(&self.#field_name)
                .map(::core::option::Option::Some)
                .map_err(|_| ::keyset::KeysetError::InvalidReferenceType),
        });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::keyset::Seekable for #struct_name #ty_generics #where_clause {
            fn seek_field(&self, field: &str) -> ::core::option::Option<::keyset::bson::Bson> {
                ::keyset::Seekable::try_seek_field(self, field).ok().flatten()
            }

            fn try_seek_field(
                &self,
                field: &str,
            ) -> ::keyset::Result<::core::option::Option<::keyset::bson::Bson>> {
                match field {
                    #(#field_matches)*
                    _ => ::core::result::Result::Ok(::core::option::Option::None),
                }
            }
        }
    };

    Ok(expanded)
}

/// Convert a field identifier to UpperCamelCase.
fn to_upper_camel_case(s: &str) -> String {
    let s = s.strip_prefix("r#").unwrap_or(s);
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}
