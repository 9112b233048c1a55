//! Sort state for tables
//!
//! The host owns a [`SortState`] and passes it to every render. Clicking a
//! sortable header never mutates it; the render engine hands the host a fresh
//! state through the column's sort callback instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	/// Ascending order
	Ascending,
	/// Descending order
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Parses a sort direction from a query parameter
	///
	/// Returns `Ascending` for plain values and `Descending` for values
	/// prefixed with `-` (e.g., "name" -> Ascending, "-name" -> Descending)
	pub fn parse_from_query(s: &str) -> (Self, &str) {
		if let Some(field) = s.strip_prefix('-') {
			(Self::Descending, field)
		} else {
			(Self::Ascending, s)
		}
	}

	/// Returns the short form used in URLs and logs (`asc` / `desc`)
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Ascending => "asc",
			Self::Descending => "desc",
		}
	}
}

impl fmt::Display for SortDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SortDirection {
	type Err = TableError;

	fn from_str(s: &str) -> Result<Self> {
		match s.trim().to_ascii_lowercase().as_str() {
			"asc" | "ascending" => Ok(Self::Ascending),
			"desc" | "descending" => Ok(Self::Descending),
			_ => Err(TableError::InvalidDirection(s.to_string())),
		}
	}
}

/// Which column a table is sorted by, and in which direction.
///
/// The column is matched against column labels by equality. A state naming a
/// column the table does not have is still valid; no header is shown active.
///
/// # Example
///
/// ```
/// use reinhardt_sortable_table::{SortDirection, SortState};
///
/// let state = SortState::new("Population", SortDirection::Descending);
/// assert_eq!(state.info(), ("Population", SortDirection::Descending));
/// assert_eq!(state.to_query_param(), "-Population");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
	column: String,
	direction: SortDirection,
}

impl SortState {
	/// Creates a sort state for `column` in `direction`
	pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
		Self {
			column: column.into(),
			direction,
		}
	}

	/// Creates an ascending sort state for `column`
	pub fn ascending(column: impl Into<String>) -> Self {
		Self::new(column, SortDirection::Ascending)
	}

	/// Creates a descending sort state for `column`
	pub fn descending(column: impl Into<String>) -> Self {
		Self::new(column, SortDirection::Descending)
	}

	/// Returns the column and direction, e.g. to build a data query
	pub fn info(&self) -> (&str, SortDirection) {
		(&self.column, self.direction)
	}

	/// Returns the sorted column
	pub fn column(&self) -> &str {
		&self.column
	}

	/// Returns the sort direction
	pub fn direction(&self) -> SortDirection {
		self.direction
	}

	/// Same column, opposite direction.
	pub(crate) fn reversed(&self) -> Self {
		Self {
			column: self.column.clone(),
			direction: self.direction.toggle(),
		}
	}

	/// Switching columns always starts ascending.
	pub(crate) fn change_to(column: impl Into<String>) -> Self {
		Self::ascending(column)
	}

	/// Encodes the state as a query parameter value (`name` or `-name`)
	pub fn to_query_param(&self) -> String {
		match self.direction {
			SortDirection::Ascending => self.column.clone(),
			SortDirection::Descending => format!("-{}", self.column),
		}
	}

	/// Decodes a query parameter value produced by [`SortState::to_query_param`]
	///
	/// The column is taken verbatim, surrounding whitespace included.
	///
	/// # Errors
	///
	/// Returns [`TableError::EmptySortParameter`] when no column is named.
	pub fn from_query_param(param: &str) -> Result<Self> {
		let (direction, column) = SortDirection::parse_from_query(param);
		if column.is_empty() {
			return Err(TableError::EmptySortParameter);
		}
		Ok(Self::new(column, direction))
	}
}

impl FromStr for SortState {
	type Err = TableError;

	fn from_str(s: &str) -> Result<Self> {
		Self::from_query_param(s)
	}
}

impl fmt::Display for SortState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.column, self.direction)
	}
}
