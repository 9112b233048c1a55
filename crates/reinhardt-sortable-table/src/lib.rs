//! Sortable table component for Reinhardt
//!
//! Renders a list of records as a `<table>` markup tree whose headers reflect
//! an externally held sort state. Clicking a sortable header does not sort
//! anything: it hands the host a new [`SortState`] through the column's sort
//! callback, and the host decides whether to sort in memory or fetch a
//! re-sorted list from the server before the next render.
//!
//! # Features
//!
//! - **Columns**: simple or sortable, with per-cell attributes
//! - **Sort state**: column and direction, owned by the host, with
//!   query-string and serde encodings
//! - **Customizations**: attributes for the table, head, body, sort icon and
//!   each row
//! - **Keyed rows**: optional row identity for stable reconciliation
//!
//! # Example
//!
//! ```
//! use reinhardt_sortable_table::{Column, Config, Customizations, SortState};
//!
//! struct City {
//!     name: &'static str,
//!     population: u32,
//! }
//!
//! #[derive(Debug, PartialEq)]
//! enum Msg {
//!     SetSort(SortState),
//! }
//!
//! let config = Config::new(
//!     vec![
//!         Column::text("City", |c: &City| c.name.to_string()),
//!         Column::text("Population", |c: &City| c.population.to_string())
//!             .sortable(Msg::SetSort),
//!     ],
//!     Customizations::default(),
//! );
//!
//! let cities = [
//!     City { name: "A", population: 2 },
//!     City { name: "B", population: 1 },
//! ];
//! let view = config.view(&SortState::descending("Population"), &cities);
//! assert!(view.render_to_string().starts_with("<table><thead><tr><th>City</th>"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod config;
pub mod customize;
pub mod error;
pub mod icons;
pub mod render;
pub mod sorting;

// Re-exports for convenience
pub use column::Column;
pub use config::Config;
pub use customize::Customizations;
pub use error::{Result, TableError};
pub use icons::{ArrowIcons, SortIcons};
pub use render::{non_sorting_view, view};
pub use sorting::{SortDirection, SortState};
