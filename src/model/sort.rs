//! Sort criteria and sort-direction tokens (pure).
//!
//! A [`SortCriterion`] names one ordering rule: a domain field plus a
//! direction. Two criteria on the same field are the *same* logical sort
//! target regardless of direction, so equality and hashing are keyed on the
//! field name only.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Direction of one sort criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "ASC"),
            SortDirection::Desc => write!(f, "DESC"),
        }
    }
}

/// One ordering rule: a domain field name plus a [`SortDirection`].
///
/// # Identity
///
/// Equality and hashing consider the `field` only. The direction is a
/// mutable attribute of the same logical sort target: `age ASC` and
/// `age DESC` are the same criterion as far as set membership goes. This
/// is what lets [`crate::model::SearchCriteria::add_sort`] reject a second
/// criterion for a field that already carries one.
///
/// # Examples
///
/// ```
/// use gridpager::model::{SortCriterion, SortDirection};
///
/// let a = SortCriterion::new("age", SortDirection::Asc);
/// let b = SortCriterion::new("age", SortDirection::Desc);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortCriterion {
    field: String,
    direction: SortDirection,
}

impl SortCriterion {
    /// Create a criterion for `field` in the given direction.
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Create an ascending criterion for `field`.
    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Create a descending criterion for `field`.
    pub fn descending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// The domain field this criterion orders by.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The direction this criterion orders in.
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Flat search-term key for this criterion.
    ///
    /// Dotted field paths are flattened with underscores so the query layer
    /// can treat the sort as an ordinary named parameter: `user.age` becomes
    /// `user_age`.
    pub fn term_key(&self) -> String {
        self.field.replace('.', "_")
    }

    /// Flat search-term value for this criterion: `{term_key}_{direction}`.
    ///
    /// Together with [`term_key`](Self::term_key) this is the flat half of
    /// the dual sort representation: `user.age` descending yields the term
    /// `user_age` → `user_age_DESC`.
    pub fn term_value(&self) -> String {
        format!("{}_{}", self.term_key(), self.direction)
    }
}

impl PartialEq for SortCriterion {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field
    }
}

impl Eq for SortCriterion {}

impl Hash for SortCriterion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.field.hash(state);
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.direction)
    }
}

/// Requested direction token carried by an inbound sort interaction.
///
/// Column headers report their *current* visual direction; the engine
/// cycles from it (see [`crate::state::sort_cycle::resolve`]). Tokens
/// outside the three recognized values parse to `None` and the interaction
/// is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortHint {
    /// Column is unsorted.
    Natural,
    /// Column currently shows ascending order.
    Ascending,
    /// Column currently shows descending order.
    Descending,
}

impl SortHint {
    /// Parse a direction token. Unrecognized tokens yield `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "natural" => Some(SortHint::Natural),
            "ascending" => Some(SortHint::Ascending),
            "descending" => Some(SortHint::Descending),
            _ => None,
        }
    }
}
