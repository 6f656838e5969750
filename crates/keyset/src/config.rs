//! Builder configuration.
//!
//! [`KeysetConfig`] holds the identity-field mapping and the rule that turns
//! a store-side sort key into the record-side field name it is read from.
//! It can be built fluently or deserialized; every field has a default.

use serde::{Deserialize, Serialize};

/// Default record-side identity field.
pub const DEFAULT_RECORD_ID_FIELD: &str = "Id";

/// Default store-side identity field.
pub const DEFAULT_STORE_ID_FIELD: &str = "_id";

/// How a sort key is mapped to a record-side field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldCase {
    /// Upper-case the first letter of every word (`age` reads `Age`,
    /// `createdAt` reads `CreatedAt`).
    #[default]
    Title,
    /// Use the sort key unchanged.
    Exact,
}

impl FieldCase {
    /// Applies this rule to a sort key.
    pub fn apply(self, key: &str) -> String {
        match self {
            FieldCase::Title => to_title_case(key),
            FieldCase::Exact => key.to_string(),
        }
    }
}

/// Upper-cases every letter that starts a word.
///
/// Letters, digits and underscores continue a word; anything else (dots,
/// spaces, dashes) separates words.
fn to_title_case(key: &str) -> String {
    let mut result = String::with_capacity(key.len());
    let mut at_word_start = true;

    for c in key.chars() {
        if at_word_start {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }

    result
}

/// Configuration for a [`Builder`](crate::Builder).
///
/// # Example
///
/// ```
/// use keyset::{FieldCase, KeysetConfig};
///
/// let config = KeysetConfig::default()
///     .with_record_id_field("Uuid")
///     .with_store_id_field("uuid")
///     .with_field_case(FieldCase::Exact);
///
/// assert_eq!(config.record_id_field, "Uuid");
/// assert_eq!(config.store_id_field, "uuid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeysetConfig {
    /// Name of the identity field on the reference record.
    pub record_id_field: String,
    /// Name of the identity field in stored documents.
    pub store_id_field: String,
    /// Mapping from sort keys to record-side field names. Does not apply to
    /// the identity field, which uses `record_id_field`.
    pub field_case: FieldCase,
}

impl Default for KeysetConfig {
    fn default() -> Self {
        KeysetConfig {
            record_id_field: DEFAULT_RECORD_ID_FIELD.to_string(),
            store_id_field: DEFAULT_STORE_ID_FIELD.to_string(),
            field_case: FieldCase::default(),
        }
    }
}

impl KeysetConfig {
    /// Sets the record-side identity field (default: `Id`).
    pub fn with_record_id_field(mut self, field: impl Into<String>) -> Self {
        self.record_id_field = field.into();
        self
    }

    /// Sets the store-side identity field (default: `_id`).
    pub fn with_store_id_field(mut self, field: impl Into<String>) -> Self {
        self.store_id_field = field.into();
        self
    }

    /// Sets how sort keys are resolved on the record (default: title case).
    pub fn with_field_case(mut self, field_case: FieldCase) -> Self {
        self.field_case = field_case;
        self
    }

    /// Returns the record-side name a sort key is read from.
    pub fn record_field(&self, sort_key: &str) -> String {
        self.field_case.apply(sort_key)
    }
}
