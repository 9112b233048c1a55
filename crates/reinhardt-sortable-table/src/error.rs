//! Error types for table configuration parsing

use thiserror::Error;

/// Errors produced while parsing sort parameters.
///
/// Rendering never fails; only the query-string helpers on
/// [`SortState`](crate::SortState) and [`SortDirection`](crate::SortDirection)
/// return this error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
	/// The sort parameter names no column (`""` or `"-"`).
	#[error("sort parameter does not name a column")]
	EmptySortParameter,

	/// The direction string is neither ascending nor descending.
	#[error("invalid sort direction: {0}")]
	InvalidDirection(String),
}

/// Result type alias for table operations
pub type Result<T> = std::result::Result<T, TableError>;
