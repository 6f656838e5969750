//! Query operators emitted into filter documents.
//!
//! [`Op`] covers the comparison operators a page filter needs and [`Logic`]
//! the combinators used to join sub-filters. Both render to the store's
//! native operator keys.

use bson::{Bson, Document};

/// Comparison operator for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Strictly greater than.
    Gt,
    /// Strictly less than.
    Lt,
}

impl Op {
    /// Returns the operator key as written in a query document.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Gt => "$gt",
            Op::Lt => "$lt",
        }
    }

    /// Builds the operator document `{ "$op": value }`.
    pub fn operand(self, value: Bson) -> Document {
        let mut operand = Document::new();
        operand.insert(self.as_str(), value);
        operand
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Logical combinator over a list of sub-filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Logic {
    /// Every sub-filter must match.
    And,
    /// At least one sub-filter must match.
    Or,
}

impl Logic {
    /// Returns the combinator key as written in a query document.
    pub fn as_str(self) -> &'static str {
        match self {
            Logic::And => "$and",
            Logic::Or => "$or",
        }
    }

    /// Joins the given filters as `{ "$and" | "$or": [a, b, ...] }`.
    pub fn combine<I>(self, filters: I) -> Document
    where
        I: IntoIterator<Item = Document>,
    {
        let filters: Vec<Bson> = filters.into_iter().map(Bson::Document).collect();
        let mut combined = Document::new();
        combined.insert(self.as_str(), Bson::Array(filters));
        combined
    }
}

impl std::fmt::Display for Logic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
