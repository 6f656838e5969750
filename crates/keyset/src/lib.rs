//! Keyset - seek pagination filters for document stores.
//!
//! Keyset builds the query filter for the next page of a sorted collection
//! from the last record of the current page. Instead of skipping N documents,
//! the filter selects the records that sort strictly after that record, so
//! pages stay stable while documents are inserted and the store can answer
//! from an index.
//!
//! - Filters are plain [`bson::Document`]s in the store's query grammar
//! - Sort orders are the same sort documents handed to the store
//! - Ties are broken by the identity field, which must be unique
//! - Reference records are read through the [`Seekable`] trait
//!
//! Keyset only builds filters. It never talks to the database.
//!
//! # Quick Start
//!
//! ```rust
//! use keyset::bson::doc;
//! use keyset::{Builder, KeysetError};
//!
//! let builder = Builder::new();
//!
//! // Last record of the current page, as fetched from the store.
//! let last = doc! { "Id": "abc", "Name": "Peter Piper", "Age": 25 };
//!
//! // Sorted by identity only.
//! let next = builder.next_filter(&last, None, None)?;
//! assert_eq!(next, doc! { "_id": { "$gt": "abc" } });
//!
//! // Combined with an existing filter.
//! let base = doc! { "name": 25 };
//! let next = builder.next_filter(&last, Some(&base), None)?;
//! assert_eq!(
//!     next,
//!     doc! { "$and": [{ "name": 25 }, { "_id": { "$gt": "abc" } }] }
//! );
//! # Ok::<(), KeysetError>(())
//! ```
//!
//! # Identity and Field Names
//!
//! The identity field is called `Id` on the record and `_id` in the store by
//! default; both are configurable through [`KeysetConfig`]. Other sort keys
//! are read from the record under their title-cased name (`age` reads `Age`),
//! or unchanged with [`FieldCase::Exact`]. A sort key the record does not have
//! is skipped.
//!
//! # Errors
//!
//! | Error | Cause |
//! |-------|-------|
//! | [`KeysetError::InvalidReferenceType`] | the reference is a primitive value |
//! | [`KeysetError::MissingIdentityField`] | the reference has no identity value |
//! | [`KeysetError::InvalidSortSpecification`] | a sort direction is not `1` or `-1` |

mod builder;
mod config;
mod error;
mod op;
mod ordering;
mod traits;

pub use bson;

// Re-export public API
pub use builder::Builder;
pub use config::{FieldCase, KeysetConfig, DEFAULT_RECORD_ID_FIELD, DEFAULT_STORE_ID_FIELD};
pub use error::{KeysetError, Result};
pub use op::{Logic, Op};
pub use ordering::{Dir, OrderBy, SortSpec};
pub use traits::Seekable;

#[cfg(feature = "derive")]
pub use keyset_macros::Seekable;
