//! Next-page filter construction.
//!
//! [`Builder`] turns the last record of a page into a filter selecting the
//! records strictly after it under a given sort order. The filter only uses
//! comparison predicates, so paging never relies on skip/offset.

use bson::{Bson, Document};
use tracing::{debug, trace};

use crate::config::KeysetConfig;
use crate::error::{KeysetError, Result};
use crate::op::{Logic, Op};
use crate::ordering::SortSpec;
use crate::traits::Seekable;

/// Builds keyset pagination filters.
///
/// A builder is immutable once constructed and can be shared freely between
/// threads.
///
/// # Filter Shape
///
/// With no sort the filter is `{_id: {"$gt": id}}`. With a sort on `age` it
/// becomes
///
/// ```text
/// {"$or": [
///     {age: {"$gt": age}},               // after the reference on age
///     {age: age, _id: {"$gt": id}},      // same age, decided by identity
/// ]}
/// ```
///
/// All non-identity sort fields share these two branches: the first holds
/// every field's comparison, the second every field's equality plus the
/// identity tie-break. That is exact for a single sort field. With two or
/// more non-identity sort fields the first branch requires every field to
/// move past the reference at once, so records that tie on a leading field
/// but not on all of them match neither branch.
///
/// # Example
///
/// ```
/// use keyset::bson::doc;
/// use keyset::Builder;
///
/// let builder = Builder::new();
/// let last = doc! { "Id": "abc", "Name": "Peter Piper", "Age": 25 };
///
/// let filter = builder.next_filter(&last, None, Some(&doc! { "age": 1 })).unwrap();
/// assert_eq!(
///     filter,
///     doc! { "$or": [
///         { "age": { "$gt": 25 } },
///         { "age": 25, "_id": { "$gt": "abc" } },
///     ] }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Builder {
    config: KeysetConfig,
}

impl Builder {
    /// Creates a builder with the default identity mapping (`Id` → `_id`).
    pub fn new() -> Self {
        Builder::default()
    }

    /// Creates a builder from an explicit configuration.
    ///
    /// Every configuration is currently accepted.
    pub fn from_config(config: KeysetConfig) -> Result<Self> {
        Ok(Builder { config })
    }

    /// Returns the configuration this builder was created with.
    pub fn config(&self) -> &KeysetConfig {
        &self.config
    }

    /// Builds the filter for the page following `reference`.
    ///
    /// `filter` is an optional base filter that the result is AND-ed with.
    /// `sort` is the store sort document the pages are fetched with; every
    /// direction must be `1` or `-1`.
    ///
    /// # Errors
    ///
    /// - [`KeysetError::InvalidReferenceType`] if `reference` is a primitive,
    ///   or holds an identity or sort value that cannot be converted to BSON
    /// - [`KeysetError::MissingIdentityField`] if `reference` has no identity value
    /// - [`KeysetError::InvalidSortSpecification`] if any sort direction is invalid
    pub fn next_filter<R>(
        &self,
        reference: &R,
        filter: Option<&Document>,
        sort: Option<&Document>,
    ) -> Result<Document>
    where
        R: Seekable + ?Sized,
    {
        let id = self.identity(reference)?;
        let spec = match sort {
            Some(sort) => SortSpec::try_from(sort)?,
            None => SortSpec::new(),
        };
        self.build(reference, id, filter, &spec)
    }

    /// Builds the filter for the page following `reference`, using an
    /// already-validated sort spec.
    ///
    /// # Errors
    ///
    /// Same as [`next_filter`](Self::next_filter), minus sort validation.
    pub fn next_filter_sorted<R>(
        &self,
        reference: &R,
        filter: Option<&Document>,
        sort: &SortSpec,
    ) -> Result<Document>
    where
        R: Seekable + ?Sized,
    {
        let id = self.identity(reference)?;
        self.build(reference, id, filter, sort)
    }

    fn identity<R>(&self, reference: &R) -> Result<Bson>
    where
        R: Seekable + ?Sized,
    {
        if !reference.is_composite() {
            return Err(KeysetError::InvalidReferenceType);
        }
        reference
            .try_seek_field(&self.config.record_id_field)?
            .ok_or_else(|| KeysetError::MissingIdentityField {
                field: self.config.record_id_field.clone(),
            })
    }

    fn build<R>(
        &self,
        reference: &R,
        id: Bson,
        filter: Option<&Document>,
        sort: &SortSpec,
    ) -> Result<Document>
    where
        R: Seekable + ?Sized,
    {
        let page = self.page_filter(reference, id, sort)?;
        let combined = match filter {
            Some(base) if !base.is_empty() => Logic::And.combine([base.clone(), page]),
            _ => page,
        };
        trace!(filter = %combined, "built next page filter");
        Ok(combined)
    }

    fn page_filter<R>(&self, reference: &R, id: Bson, sort: &SortSpec) -> Result<Document>
    where
        R: Seekable + ?Sized,
    {
        let id_field = self.config.store_id_field.as_str();

        let mut next = Document::new();
        let mut exact = Document::new();

        for order_by in sort {
            let op = order_by.dir.op();

            if order_by.field == id_field {
                // Identity alone is already a total order.
                if sort.len() == 1 {
                    return Ok(comparison(id_field, op, id));
                }
                // Unique, so it never ties: no exact-match clause.
                next.insert(id_field, op.operand(id.clone()));
                continue;
            }

            let record_field = self.config.record_field(&order_by.field);
            let Some(value) = reference.try_seek_field(&record_field)? else {
                debug!(
                    field = %order_by.field,
                    record_field = %record_field,
                    "sort field not found on reference, skipping"
                );
                continue;
            };

            next.insert(order_by.field.clone(), op.operand(value.clone()));
            exact.insert(order_by.field.clone(), value);
        }

        let page = if !exact.is_empty() {
            exact.insert(id_field, Op::Gt.operand(id));
            Logic::Or.combine([next, exact])
        } else if !next.is_empty() {
            next
        } else {
            comparison(id_field, Op::Gt, id)
        };
        Ok(page)
    }
}

/// `{ field: { "$op": value } }`
fn comparison(field: &str, op: Op, value: Bson) -> Document {
    let mut flt = Document::new();
    flt.insert(field, op.operand(value));
    flt
}
