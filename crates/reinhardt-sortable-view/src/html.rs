//! HTML element builders
//!
//! Thin constructors returning an empty [`ElementView`] for the tags a table
//! component needs. Chain the fluent methods of [`ElementView`] to fill them:
//!
//! ```
//! use reinhardt_sortable_view::html::{td, tr};
//! use reinhardt_sortable_view::IntoView;
//!
//! let row: reinhardt_sortable_view::View<()> = tr()
//!     .attr("class", "odd")
//!     .child(td().child("Tokyo"))
//!     .into_view();
//! assert_eq!(row.render_to_string(), "<tr class=\"odd\"><td>Tokyo</td></tr>");
//! ```

use std::borrow::Cow;

use crate::view::{ElementView, View};

/// Macro for defining HTML element creation functions
macro_rules! define_element {
	($(#[$meta:meta])* $name:ident, $tag:literal) => {
		$(#[$meta])*
		pub fn $name<Msg>() -> ElementView<Msg> {
			View::element($tag)
		}
	};
}

// ============================================================================
// Table Content Elements
// ============================================================================

define_element!(
	/// Create a `<table>` element
	///
	/// Represents tabular data, presented in a two-dimensional table of rows
	/// and columns of cells.
	table, "table"
);

define_element!(
	/// Create a `<thead>` element
	///
	/// Encapsulates the rows that comprise the head of a table.
	thead, "thead"
);

define_element!(
	/// Create a `<tbody>` element
	///
	/// Encapsulates the rows that comprise the body of a table.
	tbody, "tbody"
);

define_element!(
	/// Create a `<tr>` element
	///
	/// Defines a row of cells in a table.
	tr, "tr"
);

define_element!(
	/// Create a `<th>` element
	///
	/// Defines a cell as the header of a group of table cells.
	th, "th"
);

define_element!(
	/// Create a `<td>` element
	///
	/// Defines a cell of a table that contains data.
	td, "td"
);

// ============================================================================
// Inline Text Semantics Elements
// ============================================================================

define_element!(
	/// Create a `<span>` element
	span, "span"
);

/// Create a text node.
pub fn text<Msg>(content: impl Into<Cow<'static, str>>) -> View<Msg> {
	View::text(content)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::view::IntoView;
	use rstest::rstest;

	#[rstest]
	fn test_table_elements_have_expected_tags() {
		let tags: Vec<String> = vec![
			table::<()>(),
			thead(),
			tbody(),
			tr(),
			th(),
			td(),
			span(),
		]
		.iter()
		.map(|el| el.tag_name().to_string())
		.collect();
		assert_eq!(tags, ["table", "thead", "tbody", "tr", "th", "td", "span"]);
	}

	#[rstest]
	fn test_nested_table_renders() {
		let view: View<()> = table()
			.child(thead().child(tr().child(th().child(text("City")))))
			.child(tbody().child(tr().child(td().child("Oslo"))))
			.into_view();
		assert_eq!(
			view.render_to_string(),
			"<table><thead><tr><th>City</th></tr></thead><tbody><tr><td>Oslo</td></tr></tbody></table>"
		);
	}
}
