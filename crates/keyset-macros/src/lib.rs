//! Proc macros for Keyset.
//!
//! - [`Seekable`] - Generate the record accessor used to build next-page filters

mod seeker;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Seekable` trait for structs used as page references.
///
/// Every named field is exposed under its UpperCamelCase name and converted
/// with `bson::to_bson`, so field types must implement `serde::Serialize`.
/// A field whose value fails to convert (a `u64` above `i64::MAX`, a map
/// with non-string keys) makes filter construction fail with
/// `KeysetError::InvalidReferenceType` rather than reading as absent.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `skip` | Exclude this field from the accessor |
/// | `rename = "..."` | Expose the field under a custom name |
///
/// # Example
///
/// ```ignore
/// use keyset::bson::doc;
/// use keyset::{Builder, Seekable};
///
/// #[derive(Seekable)]
/// struct Person {
///     id: String,
///     name: String,
///     age: i32,
///     #[seek(skip)]
///     password_hash: String,
/// }
///
/// let peter = Person {
///     id: "abc".into(),
///     name: "Peter Piper".into(),
///     age: 25,
///     password_hash: String::new(),
/// };
///
/// let filter = Builder::new()
///     .next_filter(&peter, None, Some(&doc! { "age": 1 }))
///     .unwrap();
/// ```
#[proc_macro_derive(Seekable, attributes(seek))]
pub fn seekable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    seeker::seekable_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
