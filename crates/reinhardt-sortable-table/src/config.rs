//! Table configuration

use std::fmt;
use std::sync::Arc;

use reinhardt_sortable_view::View;

use crate::column::Column;
use crate::customize::Customizations;
use crate::icons::{ArrowIcons, SortIcons};
use crate::render;
use crate::sorting::SortState;

/// Computes the stable identity of a row for keyed rendering.
pub type RowIdentity<R> = Arc<dyn Fn(&R) -> String + Send + Sync>;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Immutable table configuration.
///
/// Build it once, outside the render loop, and pass it to every render. It
/// owns the columns, the customizations, the sort icons and, for keyed
/// tables, the row identity function.
///
/// # Render flow
///
/// ```mermaid
/// graph LR
///     Host["Host state"] -->|SortState + rows| View["view()"]
///     Config["Config"] --> View
///     View --> Tree["View&lt;Msg&gt;"]
///     Tree -->|header click| OnSort["on_sort(next SortState)"]
///     OnSort -->|Msg| Host
/// ```
///
/// # Example
///
/// ```
/// use reinhardt_sortable_table::{Column, Config, Customizations, SortState};
///
/// struct City {
///     id: u32,
///     name: String,
/// }
///
/// enum Msg {
///     SetSort(SortState),
/// }
///
/// let config: Config<City, Msg> = Config::keyed(
///     |city: &City| city.id.to_string(),
///     vec![Column::text("City", |c: &City| c.name.clone()).sortable(Msg::SetSort)],
///     Customizations::default(),
/// );
/// assert!(config.is_keyed());
/// ```
pub struct Config<R, Msg> {
	columns: Vec<Column<R, Msg>>,
	row_identity: Option<RowIdentity<R>>,
	customizations: Customizations<R, Msg>,
	icons: Arc<dyn SortIcons<Msg>>,
}

impl<R, Msg> Config<R, Msg> {
	/// Creates a configuration rendering body rows positionally.
	pub fn new(columns: Vec<Column<R, Msg>>, customizations: Customizations<R, Msg>) -> Self {
		Self {
			columns,
			row_identity: None,
			customizations,
			icons: Arc::new(ArrowIcons),
		}
	}

	/// Creates a configuration rendering keyed body rows.
	///
	/// Use this whenever rows may be reordered, inserted or removed between
	/// renders so the host runtime can match rows by identity.
	pub fn keyed<F>(
		row_identity: F,
		columns: Vec<Column<R, Msg>>,
		customizations: Customizations<R, Msg>,
	) -> Self
	where
		F: Fn(&R) -> String + Send + Sync + 'static,
	{
		Self {
			row_identity: Some(Arc::new(row_identity)),
			..Self::new(columns, customizations)
		}
	}

	/// Replaces the sort direction icons.
	pub fn with_icons(mut self, icons: impl SortIcons<Msg> + 'static) -> Self {
		self.icons = Arc::new(icons);
		self
	}

	/// Returns the columns in display order.
	pub fn columns(&self) -> &[Column<R, Msg>] {
		&self.columns
	}

	/// Returns the structural customizations.
	pub fn customizations(&self) -> &Customizations<R, Msg> {
		&self.customizations
	}

	/// Returns the sort direction icons.
	pub fn icons(&self) -> &dyn SortIcons<Msg> {
		self.icons.as_ref()
	}

	/// Returns `true` if body rows are keyed.
	pub fn is_keyed(&self) -> bool {
		self.row_identity.is_some()
	}

	/// Computes the key of `row`, or `None` for positional tables.
	pub fn row_key(&self, row: &R) -> Option<String> {
		self.row_identity.as_ref().map(|identity| identity(row))
	}

	/// Returns the sortable column marked active by `state`, if any.
	pub fn active_column(&self, state: &SortState) -> Option<&Column<R, Msg>> {
		self.columns
			.iter()
			.find(|column| column.is_sortable() && column.label() == state.column())
	}
}

impl<R, Msg: 'static> Config<R, Msg> {
	/// Renders the table with `state` marking the active column.
	///
	/// See [`render::view`].
	pub fn view(&self, state: &SortState, rows: &[R]) -> View<Msg> {
		render::view(self, state, rows)
	}

	/// Renders the table without any active column.
	///
	/// See [`render::non_sorting_view`].
	pub fn non_sorting_view(&self, rows: &[R]) -> View<Msg> {
		render::non_sorting_view(self, rows)
	}
}

impl<R, Msg> Clone for Config<R, Msg> {
	fn clone(&self) -> Self {
		Self {
			columns: self.columns.clone(),
			row_identity: self.row_identity.clone(),
			customizations: self.customizations.clone(),
			icons: Arc::clone(&self.icons),
		}
	}
}

impl<R, Msg> fmt::Debug for Config<R, Msg> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Config")
			.field("columns", &self.columns)
			.field("keyed", &self.is_keyed())
			.field("customizations", &self.customizations)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[derive(Debug)]
	struct Row {
		id: u32,
		name: &'static str,
	}

	#[derive(Debug, PartialEq)]
	enum Msg {
		SetSort(SortState),
	}

	fn columns() -> Vec<Column<Row, Msg>> {
		vec![
			Column::text("Id", |row: &Row| row.id.to_string()),
			Column::text("Name", |row: &Row| row.name.to_string()).sortable(Msg::SetSort),
		]
	}

	#[rstest]
	fn test_positional_config() {
		let config = Config::new(columns(), Customizations::default());
		assert!(!config.is_keyed());
		assert_eq!(config.columns().len(), 2);
		assert_eq!(config.row_key(&Row { id: 1, name: "a" }), None);
	}

	#[rstest]
	fn test_keyed_config() {
		let config = Config::keyed(
			|row: &Row| format!("row-{}", row.id),
			columns(),
			Customizations::default(),
		);
		assert!(config.is_keyed());
		assert_eq!(
			config.row_key(&Row { id: 4, name: "d" }),
			Some("row-4".to_string())
		);
	}

	#[rstest]
	#[case(SortState::ascending("Name"), Some("Name"))]
	#[case(SortState::descending("Name"), Some("Name"))]
	#[case(SortState::ascending("Id"), None)]
	#[case(SortState::ascending("Missing"), None)]
	fn test_active_column(#[case] state: SortState, #[case] expected: Option<&str>) {
		let config = Config::new(columns(), Customizations::default());
		assert_eq!(config.active_column(&state).map(Column::label), expected);
	}

	#[rstest]
	fn test_clone_shares_columns() {
		let config = Config::new(columns(), Customizations::default());
		let cloned = config.clone();
		assert_eq!(cloned.columns().len(), config.columns().len());
		assert_eq!(cloned.columns()[1].label(), "Name");
	}
}
