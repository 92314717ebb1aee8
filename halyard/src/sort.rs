//! Sort criteria for paginated list endpoints
//!
//! A sort criterion is a `(field, direction)` pair. Criteria are ordered:
//! the first entry is the primary sort key. On the wire a criterion is
//! rendered as `field,direction` (e.g. `id,desc`), matching the query
//! parameter convention used by paginated REST APIs.
//!
//! # Example
//!
//! ```rust
//! use halyard::sort::{SortCriterion, SortDirection};
//!
//! let sort = SortCriterion::by("createdAt", SortDirection::Descending);
//! assert_eq!(sort.to_string(), "createdAt,desc");
//!
//! let parsed: SortCriterion = "id,asc".parse().unwrap();
//! assert_eq!(parsed, SortCriterion::by("id", SortDirection::Ascending));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Sort direction for a single criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9, oldest first)
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Descending order (Z-A, 9-0, newest first)
    #[serde(rename = "desc")]
    Descending,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    /// Parse a direction, accepting both the short and the long form
    /// in any casing (`asc`, `ASC`, `ascending`, `desc`, `DESCENDING`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(Error::BadRequest(format!(
                "invalid sort direction: {other}"
            ))),
        }
    }
}

impl SortDirection {
    /// Check whether this direction is ascending
    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        matches!(self, Self::Ascending)
    }
}

/// A single `(field, direction)` sort criterion
///
/// Immutable once constructed. Lists of criteria preserve input order,
/// primary sort key first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriterion {
    /// Field the collection is sorted by
    pub field: String,
    /// Direction applied to the field
    pub direction: SortDirection,
}

impl SortCriterion {
    /// Create a new criterion
    ///
    /// # Example
    ///
    /// ```rust
    /// use halyard::sort::{SortCriterion, SortDirection};
    ///
    /// let sort = SortCriterion::by("id", SortDirection::Descending);
    /// assert_eq!(sort.field, "id");
    /// ```
    pub fn by(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Render this criterion as a `sort` query parameter value
    ///
    /// The field name is percent-encoded; the separating comma and the
    /// direction are emitted verbatim (`id,desc`).
    #[must_use]
    pub fn as_query_value(&self) -> String {
        format!("{},{}", urlencoding::encode(&self.field), self.direction)
    }

    /// Parse a `;`-separated list of criteria (`id,desc;name,asc`)
    ///
    /// An empty string yields an empty list. Fails with
    /// [`Error::BadRequest`] on an empty field name or an unknown
    /// direction.
    ///
    /// # Example
    ///
    /// ```rust
    /// use halyard::sort::{SortCriterion, SortDirection};
    ///
    /// let sorts = SortCriterion::parse_list("id,desc;name").unwrap();
    /// assert_eq!(sorts.len(), 2);
    /// assert_eq!(sorts[1].direction, SortDirection::Ascending);
    /// ```
    pub fn parse_list(input: &str) -> Result<Vec<Self>, Error> {
        input
            .split(';')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field, self.direction)
    }
}

impl FromStr for SortCriterion {
    type Err = Error;

    /// Parse `field,direction`; a missing direction defaults to ascending.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = match s.split_once(',') {
            Some((field, direction)) => (field.trim(), direction.parse()?),
            None => (s.trim(), SortDirection::Ascending),
        };
        if field.is_empty() {
            return Err(Error::BadRequest("empty sort field".to_string()));
        }
        Ok(Self::by(field, direction))
    }
}
