//! Error types for the keyset crate.

use bson::Bson;
use thiserror::Error;

/// Errors that can occur when building a next-page filter.
///
/// All variants describe a malformed call site. None of them are transient,
/// so retrying with the same inputs always fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KeysetError {
    /// The reference record is a primitive value rather than a composite one.
    #[error("struct type object expected")]
    InvalidReferenceType,

    /// The reference record has no value under the configured identity field.
    #[error("given object does not have an ID field (expected '{field}')")]
    MissingIdentityField { field: String },

    /// A sort entry's direction is neither `1` nor `-1`.
    #[error("given order by document is invalid: '{field}' has direction {direction}")]
    InvalidSortSpecification { field: String, direction: Bson },
}

/// Result type for keyset operations.
pub type Result<T> = std::result::Result<T, KeysetError>;
