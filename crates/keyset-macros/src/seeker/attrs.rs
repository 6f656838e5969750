//! Attribute parsing for the Seekable derive macro.
//!
//! This module provides the parser for the `#[seek(...)]` field attributes
//! used by the `Seekable` derive macro.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Lit, Meta, Result, Token,
};

/// Field-level attributes from `#[seek(...)]`.
#[derive(Debug, Clone)]
pub struct SeekAttr {
    /// Leave this field out of the accessor.
    pub skip: bool,
    /// Custom record-side name (default: UpperCamel field name).
    pub rename: Option<String>,
    /// The span for error reporting.
    pub span: Span,
}

impl Default for SeekAttr {
    fn default() -> Self {
        SeekAttr {
            skip: false,
            rename: None,
            span: Span::call_site(),
        }
    }
}

impl Parse for SeekAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = SeekAttr {
            span: input.span(),
            ..SeekAttr::default()
        };

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) if p.is_ident("skip") => {
                    attr.skip = true;
                }

                // rename = "CustomName"
                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    if let syn::Expr::Lit(syn::ExprLit {
                        lit: Lit::Str(s), ..
                    }) = &nv.value
                    {
                        attr.rename = Some(s.value());
                    } else {
                        return Err(Error::new(
                            nv.value.span(),
                            "rename must be a string literal",
                        ));
                    }
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown seek attribute. Expected: skip or rename = \"...\"",
                    ));
                }
            }
        }

        if attr.skip && attr.rename.is_some() {
            return Err(Error::new(
                attr.span,
                "a skipped field cannot be renamed",
            ));
        }

        Ok(attr)
    }
}

/// Extract `#[seek(...)]` attributes from a field's attributes.
pub fn parse_seek_attrs(attrs: &[Attribute]) -> Result<SeekAttr> {
    for attr in attrs {
        if attr.path().is_ident("seek") {
            return attr.parse_args::<SeekAttr>();
        }
    }
    Ok(SeekAttr::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_seek(tokens: &str) -> Result<SeekAttr> {
        syn::parse_str::<SeekAttr>(tokens)
    }

    #[test]
    fn test_seek_skip() {
        let attr = parse_seek("skip").unwrap();
        assert!(attr.skip);
        assert_eq!(attr.rename, None);
    }

    #[test]
    fn test_seek_rename() {
        let attr = parse_seek(r#"rename = "Years""#).unwrap();
        assert!(!attr.skip);
        assert_eq!(attr.rename, Some("Years".to_string()));
    }

    #[test]
    fn test_seek_empty() {
        let attr = parse_seek("").unwrap();
        assert!(!attr.skip);
        assert_eq!(attr.rename, None);
    }

    #[test]
    fn test_seek_rename_requires_string() {
        let result = parse_seek("rename = 5");
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("rename must be a string literal"));
    }

    #[test]
    fn test_seek_unknown_attribute() {
        let result = parse_seek("String");
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("unknown seek attribute"));
    }

    #[test]
    fn test_seek_skip_and_rename_conflict() {
        let result = parse_seek(r#"skip, rename = "X""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_seek_attrs_ignores_other_attributes() {
        let field: syn::Field = syn::parse_quote! {
            #[serde(rename = "x")]
            #[seek(rename = "Other")]
            pub x: i32
        };
        let attr = parse_seek_attrs(&field.attrs).unwrap();
        assert_eq!(attr.rename, Some("Other".to_string()));

        let field: syn::Field = syn::parse_quote! {
            #[doc = "plain"]
            pub y: i32
        };
        let attr = parse_seek_attrs(&field.attrs).unwrap();
        assert!(!attr.skip);
        assert_eq!(attr.rename, None);
    }
}
