//! Render engine
//!
//! Turns a [`Config`], an optional [`SortState`] and the host's rows into a
//! `<table>` markup tree. Rows are rendered in the order given; reordering the
//! data is always the host's job.

use reinhardt_sortable_view::html::{table, tbody, td, th, thead, tr};
use reinhardt_sortable_view::{Callback, ElementView, IntoView, View};

use crate::column::Column;
use crate::config::Config;
use crate::sorting::SortState;

/// Renders the table with `state` deciding the active column.
///
/// The sortable column whose label equals `state.column()` shows the
/// direction icon, and clicking it emits the same column in the opposite
/// direction. Clicking any other sortable column emits that column, ascending.
pub fn view<R, Msg: 'static>(config: &Config<R, Msg>, state: &SortState, rows: &[R]) -> View<Msg> {
	render(config, Some(state), rows)
}

/// Renders the table without a sort state.
///
/// No column is active and no header listens for clicks, sortable or not.
pub fn non_sorting_view<R, Msg: 'static>(config: &Config<R, Msg>, rows: &[R]) -> View<Msg> {
	render(config, None, rows)
}

fn render<R, Msg: 'static>(
	config: &Config<R, Msg>,
	state: Option<&SortState>,
	rows: &[R],
) -> View<Msg> {
	tracing::trace!(
		columns = config.columns().len(),
		rows = rows.len(),
		keyed = config.is_keyed(),
		sorted = state.is_some(),
		"rendering sortable table"
	);
	if let Some(state) = state.filter(|state| config.active_column(state).is_none()) {
		tracing::debug!(
			column = state.column(),
			"sort state matches no sortable column"
		);
	}

	let customizations = config.customizations();
	let head = thead()
		.attributes(customizations.head_attributes().iter().cloned())
		.child(tr().children(
			config
				.columns()
				.iter()
				.map(|column| header_cell(config, column, state)),
		));

	let mut body = tbody().attributes(customizations.body_attributes().iter().cloned());
	if config.is_keyed() {
		body = body.keyed();
	}
	let body = body.children(rows.iter().map(|row| body_row(config, row)));

	table()
		.attributes(customizations.table_attributes().iter().cloned())
		.child(head)
		.child(body)
		.into_view()
}

fn header_cell<R, Msg: 'static>(
	config: &Config<R, Msg>,
	column: &Column<R, Msg>,
	state: Option<&SortState>,
) -> ElementView<Msg> {
	let label = column.label().to_string();
	match (column.on_sort(), state) {
		(Some(on_sort), Some(current)) if current.column() == label => {
			let icon = config.icons().indicator(
				current.direction(),
				config.customizations().sort_attributes().to_vec(),
			);
			th().on_click(sort_handler(on_sort, current.reversed()))
				.child(label)
				.child(icon)
		}
		(Some(on_sort), Some(_)) => th()
			.on_click(sort_handler(on_sort, SortState::change_to(label.clone())))
			.child(label),
		(None, _) | (Some(_), None) => th().child(label),
	}
}

fn sort_handler<Msg: 'static>(
	on_sort: &Callback<SortState, Msg>,
	next: SortState,
) -> impl Fn() -> Msg + Send + Sync + 'static {
	let on_sort = on_sort.clone();
	move || {
		tracing::debug!(
			column = next.column(),
			direction = %next.direction(),
			"sort header activated"
		);
		on_sort.call(next.clone())
	}
}

fn body_row<R, Msg>(config: &Config<R, Msg>, row: &R) -> ElementView<Msg> {
	let cells = config.columns().iter().map(|column| {
		td().attributes(column.cell_attributes().iter().cloned())
			.child(column.render(row))
	});
	let row_element = tr()
		.attributes(config.customizations().row_attributes(row))
		.children(cells);
	match config.row_key(row) {
		Some(key) => row_element.key(key),
		None => row_element,
	}
}
