//! Common test fixtures for reinhardt-sortable-table tests

use reinhardt_sortable_table::{Column, Config, Customizations, SortState};
use reinhardt_sortable_view::{ElementView, View};
use rstest::*;

/// Test city data structure for table tests
#[derive(Debug, Clone, PartialEq)]
pub struct City {
	pub id: u32,
	pub name: String,
	pub population: u64,
}

/// Host message produced by header clicks
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
	SetSort(SortState),
}

/// Fixture providing sample cities in the order the host sorted them
#[fixture]
pub fn cities() -> Vec<City> {
	vec![
		City {
			id: 1,
			name: "A".to_string(),
			population: 2,
		},
		City {
			id: 2,
			name: "B".to_string(),
			population: 1,
		},
	]
}

/// Simple "City" column followed by a sortable "Population" column
pub fn city_columns() -> Vec<Column<City, Msg>> {
	vec![
		Column::text("City", |city: &City| city.name.clone()),
		Column::text("Population", |city: &City| city.population.to_string())
			.sortable(Msg::SetSort),
	]
}

/// Fixture providing a positional table configuration
#[fixture]
pub fn city_config() -> Config<City, Msg> {
	Config::new(city_columns(), Customizations::default())
}

/// Fixture providing a keyed table configuration
#[fixture]
pub fn keyed_city_config() -> Config<City, Msg> {
	Config::keyed(
		|city: &City| format!("city-{}", city.id),
		city_columns(),
		Customizations::default(),
	)
}

/// Returns the `<thead>` and `<tbody>` of a rendered table
pub fn sections(view: &View<Msg>) -> (&ElementView<Msg>, &ElementView<Msg>) {
	let table = view.as_element().expect("table element");
	assert_eq!(table.tag_name(), "table");
	let mut sections = table.child_elements();
	let head = sections.next().expect("thead element");
	let body = sections.next().expect("tbody element");
	(head, body)
}

/// Returns the `<th>` cells of a rendered table
pub fn header_cells(view: &View<Msg>) -> Vec<&ElementView<Msg>> {
	let (head, _) = sections(view);
	let row = head.child_elements().next().expect("header row");
	row.child_elements().collect()
}

/// Returns the `<tr>` rows of a rendered table body
pub fn body_rows(view: &View<Msg>) -> Vec<&ElementView<Msg>> {
	let (_, body) = sections(view);
	body.child_elements().collect()
}
