//! Column definitions
//!
//! A [`Column`] knows its header label, how to render one cell for a row and
//! which attributes every one of its cells carries. Sortable columns also
//! know how to turn a new [`SortState`] into a host message.

use std::fmt;
use std::sync::Arc;

use reinhardt_sortable_view::{Attribute, Callback, View};

use crate::sorting::SortState;

/// Renders one cell's content for a row.
pub type CellRenderer<R, Msg> = Arc<dyn Fn(&R) -> View<Msg> + Send + Sync>;

/// Fields shared by every kind of column.
pub struct ColumnDef<R, Msg> {
	label: String,
	render: CellRenderer<R, Msg>,
	cell_attributes: Vec<Attribute<Msg>>,
}

impl<R, Msg> Clone for ColumnDef<R, Msg> {
	fn clone(&self) -> Self {
		Self {
			label: self.label.clone(),
			render: Arc::clone(&self.render),
			cell_attributes: self.cell_attributes.clone(),
		}
	}
}

/// A table column.
///
/// The label doubles as the column's sort identity: a [`SortState`] marks this
/// column active when its column equals the label. Keep labels unique within
/// one table, or several headers will be shown active at once.
///
/// # Example
///
/// ```
/// use reinhardt_sortable_table::{Column, SortState};
/// use reinhardt_sortable_view::View;
///
/// struct City {
///     name: String,
/// }
///
/// enum Msg {
///     SetSort(SortState),
/// }
///
/// let column: Column<City, Msg> =
///     Column::new("City", |c: &City| View::text(c.name.clone()), [])
///         .sortable(Msg::SetSort);
/// assert!(column.is_sortable());
/// assert_eq!(column.label(), "City");
/// ```
pub enum Column<R, Msg> {
	/// A column whose header cannot be clicked.
	Simple(ColumnDef<R, Msg>),
	/// A column whose header emits a sort message when clicked.
	Sortable {
		/// Label, renderer and cell attributes.
		def: ColumnDef<R, Msg>,
		/// Turns the next sort state into a host message.
		on_sort: Callback<SortState, Msg>,
	},
}

impl<R, Msg> Column<R, Msg> {
	/// Defines a simple (non-sortable) column.
	///
	/// # Arguments
	///
	/// * `label` - Header text, also used as the sort identity
	/// * `render` - Produces the cell content for a row
	/// * `cell_attributes` - Attributes applied to every `<td>` of this column
	pub fn new<F>(
		label: impl Into<String>,
		render: F,
		cell_attributes: impl IntoIterator<Item = Attribute<Msg>>,
	) -> Self
	where
		F: Fn(&R) -> View<Msg> + Send + Sync + 'static,
	{
		Self::Simple(ColumnDef {
			label: label.into(),
			render: Arc::new(render),
			cell_attributes: cell_attributes.into_iter().collect(),
		})
	}

	/// Defines a simple column whose cells show the extracted string.
	pub fn text<F>(label: impl Into<String>, extractor: F) -> Self
	where
		F: Fn(&R) -> String + Send + Sync + 'static,
	{
		Self::new(label, move |row: &R| View::text(extractor(row)), [])
	}

	/// Makes this column sortable.
	///
	/// Calling this on an already sortable column replaces its callback.
	pub fn sortable<F>(self, on_sort: F) -> Self
	where
		F: Fn(SortState) -> Msg + Send + Sync + 'static,
	{
		let def = match self {
			Self::Simple(def) | Self::Sortable { def, .. } => def,
		};
		Self::Sortable {
			def,
			on_sort: Callback::new(on_sort),
		}
	}

	fn def(&self) -> &ColumnDef<R, Msg> {
		match self {
			Self::Simple(def) | Self::Sortable { def, .. } => def,
		}
	}

	/// Returns the header label.
	pub fn label(&self) -> &str {
		&self.def().label
	}

	/// Returns `true` for sortable columns.
	pub fn is_sortable(&self) -> bool {
		matches!(self, Self::Sortable { .. })
	}

	/// Returns the attributes applied to every cell of this column.
	pub fn cell_attributes(&self) -> &[Attribute<Msg>] {
		&self.def().cell_attributes
	}

	/// Renders the cell content for `row`.
	pub fn render(&self, row: &R) -> View<Msg> {
		(self.def().render)(row)
	}

	/// Returns the sort callback of a sortable column.
	pub fn on_sort(&self) -> Option<&Callback<SortState, Msg>> {
		match self {
			Self::Simple(_) => None,
			Self::Sortable { on_sort, .. } => Some(on_sort),
		}
	}
}

impl<R, Msg> Clone for Column<R, Msg> {
	fn clone(&self) -> Self {
		match self {
			Self::Simple(def) => Self::Simple(def.clone()),
			Self::Sortable { def, on_sort } => Self::Sortable {
				def: def.clone(),
				on_sort: on_sort.clone(),
			},
		}
	}
}

impl<R, Msg> fmt::Debug for Column<R, Msg> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Column")
			.field("label", &self.label())
			.field("sortable", &self.is_sortable())
			.field("cell_attributes", &self.cell_attributes())
			.finish_non_exhaustive()
	}
}
