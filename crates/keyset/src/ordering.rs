//! Sort specification types.
//!
//! Provides [`Dir`] for sort direction, [`OrderBy`] for a single field and
//! [`SortSpec`] for the ordered list a page is sorted by. A spec is usually
//! parsed from the same sort document that is handed to the store, so that
//! the filter and the query agree on the order.

use bson::{Bson, Document};

use crate::error::{KeysetError, Result};
use crate::op::Op;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Reads a direction marker from a sort document value.
    ///
    /// Only the integers `1` and `-1` are recognized. Any other number, and
    /// any non-integer value, yields `None`.
    pub fn from_bson(value: &Bson) -> Option<Dir> {
        match value {
            Bson::Int32(1) | Bson::Int64(1) => Some(Dir::Asc),
            Bson::Int32(-1) | Bson::Int64(-1) => Some(Dir::Desc),
            _ => None,
        }
    }

    /// Returns the direction marker used in sort documents.
    pub fn to_bson(self) -> Bson {
        match self {
            Dir::Asc => Bson::Int32(1),
            Dir::Desc => Bson::Int32(-1),
        }
    }

    /// Returns the operator selecting values that sort after a given one.
    pub fn op(self) -> Op {
        match self {
            Dir::Asc => Op::Gt,
            Dir::Desc => Op::Lt,
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single ordering clause specifying a field and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    /// The store-side field to sort by.
    pub field: String,
    /// The sort direction.
    pub dir: Dir,
}

impl OrderBy {
    /// Creates a new ascending ordering for the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        OrderBy {
            field: field.into(),
            dir: Dir::Asc,
        }
    }

    /// Creates a new descending ordering for the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        OrderBy {
            field: field.into(),
            dir: Dir::Desc,
        }
    }

    /// Creates a new ordering with the given direction.
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        OrderBy {
            field: field.into(),
            dir,
        }
    }
}

/// An ordered list of [`OrderBy`] clauses.
///
/// Order matters: the first clause is the primary sort key, later clauses
/// break ties on earlier ones.
///
/// Like a sort document, a spec holds each field at most once. Adding a
/// field that is already present replaces its direction and keeps its
/// position.
///
/// # Example
///
/// ```
/// use bson::doc;
/// use keyset::{Dir, SortSpec};
///
/// let spec = SortSpec::try_from(&doc! { "age": 1, "name": -1 }).unwrap();
/// assert_eq!(spec.len(), 2);
/// assert_eq!(spec.iter().nth(1).map(|o| o.dir), Some(Dir::Desc));
///
/// assert!(SortSpec::try_from(&doc! { "age": 3 }).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortSpec {
    orderings: Vec<OrderBy>,
}

impl SortSpec {
    /// Creates an empty spec.
    pub fn new() -> Self {
        SortSpec::default()
    }

    /// Appends an ordering clause, or redirects the field's existing one.
    pub fn then(mut self, field: impl Into<String>, dir: Dir) -> Self {
        self.push(OrderBy::new(field, dir));
        self
    }

    /// Appends an ascending ordering clause.
    pub fn then_asc(self, field: impl Into<String>) -> Self {
        self.then(field, Dir::Asc)
    }

    /// Appends a descending ordering clause.
    pub fn then_desc(self, field: impl Into<String>) -> Self {
        self.then(field, Dir::Desc)
    }

    pub fn len(&self) -> usize {
        self.orderings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orderings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrderBy> {
        self.orderings.iter()
    }

    fn push(&mut self, order_by: OrderBy) {
        match self.orderings.iter_mut().find(|o| o.field == order_by.field) {
            Some(existing) => existing.dir = order_by.dir,
            None => self.orderings.push(order_by),
        }
    }

    /// Renders the sort order as a store sort document (`{ field: 1 | -1, ... }`).
    pub fn to_document(&self) -> Document {
        let mut sort = Document::new();
        for order_by in &self.orderings {
            sort.insert(order_by.field.clone(), order_by.dir.to_bson());
        }
        sort
    }
}

impl TryFrom<&Document> for SortSpec {
    type Error = KeysetError;

    /// Parses a store sort document. Every entry is validated before any
    /// ordering is returned, so a single bad direction rejects the whole
    /// document.
    fn try_from(sort: &Document) -> Result<Self> {
        let orderings = sort
            .iter()
            .map(|(field, value)| {
                Dir::from_bson(value)
                    .map(|dir| OrderBy::new(field.as_str(), dir))
                    .ok_or_else(|| KeysetError::InvalidSortSpecification {
                        field: field.clone(),
                        direction: value.clone(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(SortSpec { orderings })
    }
}

impl From<Vec<OrderBy>> for SortSpec {
    fn from(orderings: Vec<OrderBy>) -> Self {
        orderings.into_iter().collect()
    }
}

impl FromIterator<OrderBy> for SortSpec {
    fn from_iter<I: IntoIterator<Item = OrderBy>>(iter: I) -> Self {
        let mut spec = SortSpec::new();
        for order_by in iter {
            spec.push(order_by);
        }
        spec
    }
}

impl<'a> IntoIterator for &'a SortSpec {
    type Item = &'a OrderBy;
    type IntoIter = std::slice::Iter<'a, OrderBy>;

    fn into_iter(self) -> Self::IntoIter {
        self.orderings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn dir_from_bson_markers() {
        assert_eq!(Dir::from_bson(&Bson::Int32(1)), Some(Dir::Asc));
        assert_eq!(Dir::from_bson(&Bson::Int64(1)), Some(Dir::Asc));
        assert_eq!(Dir::from_bson(&Bson::Int32(-1)), Some(Dir::Desc));
        assert_eq!(Dir::from_bson(&Bson::Int64(-1)), Some(Dir::Desc));

        assert_eq!(Dir::from_bson(&Bson::Int32(0)), None);
        assert_eq!(Dir::from_bson(&Bson::Int32(3)), None);
        assert_eq!(Dir::from_bson(&Bson::Double(1.0)), None);
        assert_eq!(Dir::from_bson(&Bson::String("asc".into())), None);
    }

    #[test]
    fn dir_op_and_display() {
        assert_eq!(Dir::Asc.op(), Op::Gt);
        assert_eq!(Dir::Desc.op(), Op::Lt);
        assert_eq!(Dir::Asc.to_string(), "asc");
        assert_eq!(Dir::Desc.to_string(), "desc");
        assert!(Dir::default().is_asc());
        assert!(Dir::Desc.is_desc());
    }

    #[test]
    fn order_by_constructors() {
        let asc = OrderBy::asc("name");
        assert_eq!(asc.field, "name");
        assert_eq!(asc.dir, Dir::Asc);

        let desc = OrderBy::desc("age");
        assert_eq!(desc.field, "age");
        assert_eq!(desc.dir, Dir::Desc);
    }

    #[test]
    fn sort_spec_parse_keeps_order() {
        let spec = SortSpec::try_from(&doc! { "b": -1, "a": 1, "_id": 1 }).unwrap();
        let fields: Vec<&str> = spec.iter().map(|o| o.field.as_str()).collect();
        assert_eq!(fields, ["b", "a", "_id"]);
        assert_eq!(spec.iter().next().map(|o| o.dir), Some(Dir::Desc));
    }

    #[test]
    fn sort_spec_parse_rejects_whole_document() {
        let err = SortSpec::try_from(&doc! { "a": 1, "b": "up" }).unwrap_err();
        assert_eq!(
            err,
            KeysetError::InvalidSortSpecification {
                field: "b".to_string(),
                direction: Bson::String("up".to_string()),
            }
        );
    }

    #[test]
    fn sort_spec_round_trips_to_document() {
        let spec = SortSpec::new().then_asc("age").then_desc("name");
        assert_eq!(spec.to_document(), doc! { "age": 1, "name": -1 });
        assert_eq!(SortSpec::try_from(&spec.to_document()).unwrap(), spec);
    }

    #[test]
    fn repeated_field_replaces_direction_in_place() {
        let spec = SortSpec::new()
            .then_asc("age")
            .then_asc("name")
            .then_desc("age");
        assert_eq!(spec.len(), 2);
        assert_eq!(spec.to_document(), doc! { "age": -1, "name": 1 });

        let spec: SortSpec = vec![OrderBy::asc("age"), OrderBy::desc("age")].into();
        assert_eq!(spec, SortSpec::new().then_desc("age"));
    }

    #[test]
    fn empty_sort_spec() {
        let spec = SortSpec::try_from(&Document::new()).unwrap();
        assert!(spec.is_empty());
        assert_eq!(spec.len(), 0);
    }
}
