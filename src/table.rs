//! Sortable table component
//!
//! This module provides access to reinhardt-sortable-table.
//!
//! ## Architecture
//!
//! - **Columns**: simple or sortable, identified by their label
//! - **Sort state**: owned by the host, reported back through `on_sort`
//! - **Config**: columns, customizations, icons and optional row identity
//! - **Render engine**: `view` and `non_sorting_view`
//!
//! ## Example
//!
//! ```
//! use reinhardt_sortable::table::{SortDirection, SortState};
//!
//! let state: SortState = "-population".parse().unwrap();
//! assert_eq!(state.info(), ("population", SortDirection::Descending));
//! assert_eq!(state.to_query_param(), "-population");
//! ```

// Re-export all reinhardt-sortable-table functionality
pub use reinhardt_sortable_table::*;
