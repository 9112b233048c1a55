//! # Reinhardt Sortable
//!
//! A sortable, configurable table component for Reinhardt front-ends.
//!
//! The table is a pure function from a configuration, a sort state and the
//! host's rows to a markup tree. The host owns the sort state and the row
//! order: a header click only reports the next [`SortState`](table::SortState)
//! as one of the host's own messages, and the host re-renders with the rows
//! sorted however it likes (in memory, or by re-querying a server).
//!
//! ## Feature Flags
//!
//! - `view` (default) - Markup tree substrate (`View`, `ElementView`, `Attribute`, `Callback`)
//! - `table` (default) - Sortable table component, implies `view`
//!
//! ## Quick Example
//!
//! ```
//! use reinhardt_sortable::prelude::*;
//!
//! #[derive(Clone)]
//! struct City {
//!     name: String,
//!     population: u64,
//! }
//!
//! #[derive(Debug, PartialEq)]
//! enum Msg {
//!     SetSort(SortState),
//! }
//!
//! // Built once, outside the render loop
//! let config = Config::new(
//!     vec![
//!         Column::text("City", |c: &City| c.name.clone()),
//!         Column::text("Population", |c: &City| c.population.to_string())
//!             .sortable(Msg::SetSort),
//!     ],
//!     Customizations::default().customize_table([class("table")]),
//! );
//!
//! let mut state = SortState::descending("Population");
//! let cities = vec![
//!     City { name: "A".into(), population: 2 },
//!     City { name: "B".into(), population: 1 },
//! ];
//!
//! let view = config.view(&state, &cities);
//! let header = view
//!     .as_element()
//!     .and_then(|table| table.child_elements().next())
//!     .and_then(|head| head.child_elements().next())
//!     .and_then(|row| row.child_elements().nth(1))
//!     .unwrap();
//!
//! // Clicking the active column asks the host to flip the direction
//! for Msg::SetSort(next) in header.dispatch(EventType::Click) {
//!     state = next;
//! }
//! assert_eq!(state, SortState::ascending("Population"));
//! ```

#![warn(missing_docs)]

#[cfg(feature = "table")]
pub mod table;
#[cfg(feature = "view")]
pub mod view;

pub mod prelude {
	//! Commonly used types, re-exported for glob import.

	#[cfg(feature = "view")]
	pub use crate::view::{
		Attribute, Callback, ElementView, EventType, IntoView, View,
		attribute::{attr, class, id, on_click, style},
	};

	#[cfg(feature = "table")]
	pub use crate::table::{
		ArrowIcons, Column, Config, Customizations, SortDirection, SortIcons, SortState, TableError,
	};
}
