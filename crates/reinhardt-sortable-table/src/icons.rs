//! Sort direction indicators
//!
//! The active header shows an icon for the current direction. Which glyphs or
//! icon fonts to use is up to the host; the table only picks between the
//! ascending and descending icon and forwards the sort attributes from
//! [`Customizations`](crate::Customizations).

use reinhardt_sortable_view::html::span;
use reinhardt_sortable_view::{Attribute, IntoView, View};

use crate::sorting::SortDirection;

/// Renders the direction indicator of the active column.
pub trait SortIcons<Msg>: Send + Sync {
	/// Icon shown while sorted ascending.
	fn ascending(&self, attributes: Vec<Attribute<Msg>>) -> View<Msg>;

	/// Icon shown while sorted descending.
	fn descending(&self, attributes: Vec<Attribute<Msg>>) -> View<Msg>;

	/// Picks the icon for `direction`.
	fn indicator(&self, direction: SortDirection, attributes: Vec<Attribute<Msg>>) -> View<Msg> {
		match direction {
			SortDirection::Ascending => self.ascending(attributes),
			SortDirection::Descending => self.descending(attributes),
		}
	}
}

/// Default icons: `▲` and `▼` in a `<span>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArrowIcons;

impl ArrowIcons {
	/// Glyph shown for ascending order
	pub const UP: &'static str = "\u{25B2}";
	/// Glyph shown for descending order
	pub const DOWN: &'static str = "\u{25BC}";
}

impl<Msg> SortIcons<Msg> for ArrowIcons {
	fn ascending(&self, attributes: Vec<Attribute<Msg>>) -> View<Msg> {
		span().attributes(attributes).child(Self::UP).into_view()
	}

	fn descending(&self, attributes: Vec<Attribute<Msg>>) -> View<Msg> {
		span().attributes(attributes).child(Self::DOWN).into_view()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use reinhardt_sortable_view::attribute::class;
	use rstest::rstest;

	#[rstest]
	#[case(SortDirection::Ascending, "<span>\u{25B2}</span>")]
	#[case(SortDirection::Descending, "<span>\u{25BC}</span>")]
	fn test_arrow_icons(#[case] direction: SortDirection, #[case] expected: &str) {
		let icon: View<()> = ArrowIcons.indicator(direction, Vec::new());
		assert_eq!(icon.render_to_string(), expected);
	}

	#[rstest]
	fn test_arrow_icons_carry_attributes() {
		let icon: View<()> = ArrowIcons.indicator(SortDirection::Ascending, vec![class("sort-icon")]);
		assert_eq!(
			icon.render_to_string(),
			"<span class=\"sort-icon\">\u{25B2}</span>"
		);
	}
}
