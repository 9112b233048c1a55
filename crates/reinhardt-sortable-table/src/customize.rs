//! Structural customizations
//!
//! [`Customizations`] holds the attributes placed on the `<table>`, `<thead>`,
//! `<tbody>` and sort icon, plus a function computing the attributes of each
//! body row. Start from [`Customizations::default`] and apply any of the
//! setters; each replaces exactly one field, so their order never matters.
//!
//! ```
//! use reinhardt_sortable_table::Customizations;
//! use reinhardt_sortable_view::attribute::class;
//!
//! let customizations: Customizations<u32, ()> = Customizations::default()
//!     .customize_table([class("table is-striped")])
//!     .customize_rows(|n: &u32| vec![class(if n % 2 == 0 { "even" } else { "odd" })]);
//! assert_eq!(customizations.table_attributes().len(), 1);
//! assert_eq!(customizations.row_attributes(&3)[0].value(), Some("odd"));
//! ```

use std::fmt;
use std::sync::Arc;

use reinhardt_sortable_view::Attribute;

/// Computes the attributes of the `<tr>` rendered for a row.
pub type RowAttributes<R, Msg> = Arc<dyn Fn(&R) -> Vec<Attribute<Msg>> + Send + Sync>;

/// Attribute customizations for the table structure.
pub struct Customizations<R, Msg> {
	table: Vec<Attribute<Msg>>,
	head: Vec<Attribute<Msg>>,
	body: Vec<Attribute<Msg>>,
	sort: Vec<Attribute<Msg>>,
	rows: Option<RowAttributes<R, Msg>>,
}

impl<R, Msg> Default for Customizations<R, Msg> {
	fn default() -> Self {
		Self {
			table: Vec::new(),
			head: Vec::new(),
			body: Vec::new(),
			sort: Vec::new(),
			rows: None,
		}
	}
}

impl<R, Msg> Clone for Customizations<R, Msg> {
	fn clone(&self) -> Self {
		Self {
			table: self.table.clone(),
			head: self.head.clone(),
			body: self.body.clone(),
			sort: self.sort.clone(),
			rows: self.rows.clone(),
		}
	}
}

impl<R, Msg> fmt::Debug for Customizations<R, Msg> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Customizations")
			.field("table", &self.table)
			.field("head", &self.head)
			.field("body", &self.body)
			.field("sort", &self.sort)
			.field("rows", &self.rows.as_ref().map(|_| "<function>"))
			.finish()
	}
}

impl<R, Msg> Customizations<R, Msg> {
	/// Sets the attributes of the `<table>` element
	pub fn customize_table(mut self, attributes: impl IntoIterator<Item = Attribute<Msg>>) -> Self {
		self.table = attributes.into_iter().collect();
		self
	}

	/// Sets the attributes of the `<thead>` element
	pub fn customize_head(mut self, attributes: impl IntoIterator<Item = Attribute<Msg>>) -> Self {
		self.head = attributes.into_iter().collect();
		self
	}

	/// Sets the attributes of the `<tbody>` element
	pub fn customize_body(mut self, attributes: impl IntoIterator<Item = Attribute<Msg>>) -> Self {
		self.body = attributes.into_iter().collect();
		self
	}

	/// Sets the attributes passed to the sort direction icon
	pub fn customize_sort(mut self, attributes: impl IntoIterator<Item = Attribute<Msg>>) -> Self {
		self.sort = attributes.into_iter().collect();
		self
	}

	/// Sets the function computing each body row's `<tr>` attributes
	pub fn customize_rows<F>(mut self, rows: F) -> Self
	where
		F: Fn(&R) -> Vec<Attribute<Msg>> + Send + Sync + 'static,
	{
		self.rows = Some(Arc::new(rows));
		self
	}

	/// Returns the `<table>` attributes
	pub fn table_attributes(&self) -> &[Attribute<Msg>] {
		&self.table
	}

	/// Returns the `<thead>` attributes
	pub fn head_attributes(&self) -> &[Attribute<Msg>] {
		&self.head
	}

	/// Returns the `<tbody>` attributes
	pub fn body_attributes(&self) -> &[Attribute<Msg>] {
		&self.body
	}

	/// Returns the sort icon attributes
	pub fn sort_attributes(&self) -> &[Attribute<Msg>] {
		&self.sort
	}

	/// Computes the `<tr>` attributes for `row` (empty without a row function)
	pub fn row_attributes(&self, row: &R) -> Vec<Attribute<Msg>> {
		self.rows.as_ref().map(|rows| rows(row)).unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use reinhardt_sortable_view::attribute::{class, id, style};
	use rstest::rstest;

	fn values(attributes: &[Attribute<()>]) -> Vec<&str> {
		attributes.iter().filter_map(Attribute::value).collect()
	}

	#[rstest]
	fn test_default_is_empty() {
		let customizations: Customizations<u8, ()> = Customizations::default();
		assert!(customizations.table_attributes().is_empty());
		assert!(customizations.head_attributes().is_empty());
		assert!(customizations.body_attributes().is_empty());
		assert!(customizations.sort_attributes().is_empty());
		assert!(customizations.row_attributes(&1).is_empty());
	}

	#[rstest]
	fn test_each_setter_touches_one_field() {
		let customizations: Customizations<u8, ()> = Customizations::default()
			.customize_table([class("table")])
			.customize_head([class("head")])
			.customize_body([id("body")])
			.customize_sort([style("margin-left: 4px")]);
		assert_eq!(values(customizations.table_attributes()), ["table"]);
		assert_eq!(values(customizations.head_attributes()), ["head"]);
		assert_eq!(values(customizations.body_attributes()), ["body"]);
		assert_eq!(values(customizations.sort_attributes()), ["margin-left: 4px"]);
	}

	#[rstest]
	fn test_setter_order_does_not_matter() {
		let a: Customizations<u8, ()> = Customizations::default()
			.customize_head([class("head")])
			.customize_table([class("table")]);
		let b: Customizations<u8, ()> = Customizations::default()
			.customize_table([class("table")])
			.customize_head([class("head")]);
		assert_eq!(values(a.table_attributes()), values(b.table_attributes()));
		assert_eq!(values(a.head_attributes()), values(b.head_attributes()));
	}

	#[rstest]
	fn test_setter_replaces_previous_value() {
		let customizations: Customizations<u8, ()> = Customizations::default()
			.customize_table([class("first")])
			.customize_table([class("second")]);
		assert_eq!(values(customizations.table_attributes()), ["second"]);
	}

	#[rstest]
	fn test_row_attributes_depend_on_row() {
		let customizations: Customizations<u8, ()> = Customizations::default()
			.customize_rows(|n: &u8| vec![class(format!("row-{n}"))]);
		assert_eq!(values(&customizations.row_attributes(&7)), ["row-7"]);
		assert_eq!(values(&customizations.row_attributes(&9)), ["row-9"]);
	}
}
