//! Record access for reference values.
//!
//! The builder reads the identity value and sort-key values off the last
//! record of a page through the [`Seekable`] trait. Structs usually derive it
//! (feature `derive`); documents fetched straight from the store already
//! implement it.

use bson::{Bson, Document};

use crate::error::Result;

/// Trait for values that can serve as the reference record of a page.
///
/// This trait is typically derived using `#[derive(Seekable)]`, but can also
/// be implemented manually.
///
/// # Derive Usage
///
/// ```ignore
/// use keyset::Seekable;
///
/// #[derive(Seekable)]
/// struct Person {
///     id: String,        // exposed as "Id"
///     name: String,      // exposed as "Name"
///     #[seek(rename = "Years")]
///     age: i32,
///     #[seek(skip)]
///     password_hash: String,
/// }
/// ```
///
/// # Manual Implementation
///
/// ```
/// use keyset::bson::Bson;
/// use keyset::Seekable;
///
/// struct Person {
///     id: String,
///     age: i32,
/// }
///
/// impl Seekable for Person {
///     fn seek_field(&self, field: &str) -> Option<Bson> {
///         match field {
///             "Id" => Some(Bson::String(self.id.clone())),
///             "Age" => Some(Bson::Int32(self.age)),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Seekable {
    /// Returns the value of a record-side field.
    ///
    /// # Returns
    ///
    /// The field value as [`Bson`], or `None` if the record has no field under
    /// that name. A present field holding null is `Some(Bson::Null)`.
    fn seek_field(&self, field: &str) -> Option<Bson>;

    /// Fallible form of [`seek_field`](Self::seek_field), used by the builder.
    ///
    /// Records whose fields are converted to [`Bson`] on access override this
    /// so that a field that exists but cannot be converted fails with
    /// [`KeysetError::InvalidReferenceType`](crate::KeysetError::InvalidReferenceType)
    /// instead of reading as absent. The derive does this.
    fn try_seek_field(&self, field: &str) -> Result<Option<Bson>> {
        Ok(self.seek_field(field))
    }

    /// Returns `false` when the value is a primitive rather than a record.
    ///
    /// Defaults to `true`; only dynamically typed values need to override it.
    fn is_composite(&self) -> bool {
        true
    }
}

impl Seekable for Document {
    fn seek_field(&self, field: &str) -> Option<Bson> {
        self.get(field).cloned()
    }
}

impl Seekable for Bson {
    fn seek_field(&self, field: &str) -> Option<Bson> {
        match self {
            Bson::Document(doc) => doc.seek_field(field),
            _ => None,
        }
    }

    fn is_composite(&self) -> bool {
        matches!(self, Bson::Document(_))
    }
}

impl<T: Seekable + ?Sized> Seekable for &T {
    fn seek_field(&self, field: &str) -> Option<Bson> {
        (**self).seek_field(field)
    }

    fn try_seek_field(&self, field: &str) -> Result<Option<Bson>> {
        (**self).try_seek_field(field)
    }

    fn is_composite(&self) -> bool {
        (**self).is_composite()
    }
}

impl<T: Seekable + ?Sized> Seekable for Box<T> {
    fn seek_field(&self, field: &str) -> Option<Bson> {
        (**self).seek_field(field)
    }

    fn try_seek_field(&self, field: &str) -> Result<Option<Bson>> {
        (**self).try_seek_field(field)
    }

    fn is_composite(&self) -> bool {
        (**self).is_composite()
    }
}
