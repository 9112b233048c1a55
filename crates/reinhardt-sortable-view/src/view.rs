//! IntoView trait and View enum for markup trees.
//!
//! A [`View`] is a plain description of markup. Nothing is mounted or diffed
//! here: the host's runtime commits the tree, uses [`ElementView::key_value`]
//! to match keyed children across renders, and calls
//! [`ElementView::dispatch`] when the user interacts with an element.

use std::borrow::Cow;
use std::fmt;

use crate::attribute::{Attribute, EventType};
use crate::callback::Callback;

/// A unified representation of renderable content.
///
/// `Msg` is the host's message type; every listener in the tree produces one.
pub enum View<Msg> {
	/// A DOM element.
	Element(ElementView<Msg>),
	/// A text node.
	Text(Cow<'static, str>),
	/// A fragment containing multiple views (no wrapper element).
	Fragment(Vec<View<Msg>>),
	/// An empty view (renders nothing).
	Empty,
}

/// Represents a DOM element in the view tree.
pub struct ElementView<Msg> {
	/// The tag name (e.g., "div", "span").
	tag: Cow<'static, str>,
	/// HTML attributes.
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	/// Child views.
	children: Vec<View<Msg>>,
	/// Whether this is a void element (no closing tag).
	is_void: bool,
	/// Event handlers attached to this element.
	event_handlers: Vec<(EventType, Callback<(), Msg>)>,
	/// Reconciliation key, matched against siblings of a keyed parent.
	key: Option<Cow<'static, str>>,
	/// Whether children are matched by key instead of position.
	keyed: bool,
}

impl<Msg> fmt::Debug for ElementView<Msg> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ElementView")
			.field("tag", &self.tag)
			.field("attrs", &self.attrs)
			.field("children", &self.children)
			.field("is_void", &self.is_void)
			.field("event_handlers_count", &self.event_handlers.len())
			.field("key", &self.key)
			.field("keyed", &self.keyed)
			.finish()
	}
}

impl<Msg> fmt::Debug for View<Msg> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			View::Element(el) => f.debug_tuple("Element").field(el).finish(),
			View::Text(text) => f.debug_tuple("Text").field(text).finish(),
			View::Fragment(children) => f.debug_tuple("Fragment").field(children).finish(),
			View::Empty => f.write_str("Empty"),
		}
	}
}

impl<Msg> Clone for ElementView<Msg> {
	fn clone(&self) -> Self {
		Self {
			tag: self.tag.clone(),
			attrs: self.attrs.clone(),
			children: self.children.clone(),
			is_void: self.is_void,
			event_handlers: self.event_handlers.clone(),
			key: self.key.clone(),
			keyed: self.keyed,
		}
	}
}

impl<Msg> Clone for View<Msg> {
	fn clone(&self) -> Self {
		match self {
			View::Element(el) => View::Element(el.clone()),
			View::Text(text) => View::Text(text.clone()),
			View::Fragment(children) => View::Fragment(children.clone()),
			View::Empty => View::Empty,
		}
	}
}

impl<Msg> ElementView<Msg> {
	/// Creates a new element view.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
			event_handlers: Vec::new(),
			key: None,
			keyed: false,
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Applies an [`Attribute`], either as a property or a listener.
	pub fn attribute(mut self, attribute: Attribute<Msg>) -> Self {
		match attribute {
			Attribute::Property { name, value } => self.attrs.push((name, value)),
			Attribute::Listener { event, handler } => self.event_handlers.push((event, handler)),
		}
		self
	}

	/// Applies a list of attributes in order.
	pub fn attributes(self, attributes: impl IntoIterator<Item = Attribute<Msg>>) -> Self {
		attributes
			.into_iter()
			.fold(self, |el, attribute| el.attribute(attribute))
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl IntoView<Msg>) -> Self {
		self.children.push(child.into_view());
		self
	}

	/// Adds multiple child views.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoView<Msg>>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_view()));
		self
	}

	/// Adds an event handler.
	pub fn on(mut self, event_type: EventType, handler: Callback<(), Msg>) -> Self {
		self.event_handlers.push((event_type, handler));
		self
	}

	/// Adds a click handler.
	pub fn on_click<F>(self, handler: F) -> Self
	where
		F: Fn() -> Msg + Send + Sync + 'static,
	{
		self.on(EventType::Click, Callback::new(move |()| handler()))
	}

	/// Sets the reconciliation key of this element.
	pub fn key(mut self, key: impl Into<Cow<'static, str>>) -> Self {
		self.key = Some(key.into());
		self
	}

	/// Marks this element's children as keyed.
	pub fn keyed(mut self) -> Self {
		self.keyed = true;
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the value of the last attribute named `name`.
	pub fn get_attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.rev()
			.find(|(n, _)| n == name)
			.map(|(_, v)| &**v)
	}

	/// Returns the child views.
	pub fn child_views(&self) -> &[View<Msg>] {
		&self.children
	}

	/// Returns the child views that are elements.
	pub fn child_elements(&self) -> impl Iterator<Item = &ElementView<Msg>> {
		self.children.iter().filter_map(View::as_element)
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Returns the event handlers.
	pub fn event_handlers(&self) -> &[(EventType, Callback<(), Msg>)] {
		&self.event_handlers
	}

	/// Returns `true` if at least one handler listens for `event`.
	pub fn has_listener(&self, event: EventType) -> bool {
		self.event_handlers.iter().any(|(e, _)| *e == event)
	}

	/// Returns the reconciliation key, if any.
	pub fn key_value(&self) -> Option<&str> {
		self.key.as_deref()
	}

	/// Returns whether children are matched by key.
	pub fn is_keyed(&self) -> bool {
		self.keyed
	}

	/// Dispatches `event` to this element.
	///
	/// Every handler registered for `event` runs once, in registration order,
	/// and the produced messages are returned in the same order.
	pub fn dispatch(&self, event: EventType) -> Vec<Msg> {
		let messages: Vec<Msg> = self
			.event_handlers
			.iter()
			.filter(|(e, _)| *e == event)
			.map(|(_, handler)| handler.emit())
			.collect();
		tracing::trace!(
			tag = %self.tag,
			event = %event,
			messages = messages.len(),
			"dispatched event"
		);
		messages
	}
}

impl<Msg> View<Msg> {
	/// Creates an element view.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> ElementView<Msg> {
		ElementView::new(tag)
	}

	/// Creates a text view.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment view.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoView<Msg>>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_view()).collect())
	}

	/// Creates an empty view.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Returns the element if this view is one.
	pub fn as_element(&self) -> Option<&ElementView<Msg>> {
		match self {
			View::Element(el) => Some(el),
			_ => None,
		}
	}

	/// Returns the concatenated, unescaped text of this view and its descendants.
	pub fn text_content(&self) -> String {
		let mut output = String::new();
		self.text_content_inner(&mut output);
		output
	}

	fn text_content_inner(&self, output: &mut String) {
		match self {
			View::Element(el) => {
				for child in el.child_views() {
					child.text_content_inner(output);
				}
			}
			View::Text(text) => output.push_str(text),
			View::Fragment(children) => {
				for child in children {
					child.text_content_inner(output);
				}
			}
			View::Empty => {}
		}
	}

	/// Renders the view to an HTML string.
	///
	/// Listeners and keys only matter to a live runtime and are not serialized.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			View::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_views() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			View::Text(text) => {
				output.push_str(&html_escape(text));
			}
			View::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			View::Empty => {}
		}
	}
}

/// Trait for types that can be converted into a View.
pub trait IntoView<Msg> {
	/// Converts self into a View.
	fn into_view(self) -> View<Msg>;
}

impl<Msg> IntoView<Msg> for View<Msg> {
	fn into_view(self) -> View<Msg> {
		self
	}
}

impl<Msg> IntoView<Msg> for ElementView<Msg> {
	fn into_view(self) -> View<Msg> {
		View::Element(self)
	}
}

impl<Msg> IntoView<Msg> for String {
	fn into_view(self) -> View<Msg> {
		View::Text(Cow::Owned(self))
	}
}

impl<Msg> IntoView<Msg> for &'static str {
	fn into_view(self) -> View<Msg> {
		View::Text(Cow::Borrowed(self))
	}
}

impl<Msg, T: IntoView<Msg>> IntoView<Msg> for Option<T> {
	fn into_view(self) -> View<Msg> {
		match self {
			Some(v) => v.into_view(),
			None => View::Empty,
		}
	}
}

impl<Msg, T: IntoView<Msg>> IntoView<Msg> for Vec<T> {
	fn into_view(self) -> View<Msg> {
		View::Fragment(self.into_iter().map(|v| v.into_view()).collect())
	}
}

impl<Msg> IntoView<Msg> for () {
	fn into_view(self) -> View<Msg> {
		View::Empty
	}
}

/// Escapes HTML special characters.
fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	type Msg = &'static str;

	#[rstest]
	fn test_element_view_creation() {
		let el: ElementView<Msg> = ElementView::new("div");
		assert_eq!(el.tag, "div");
		assert!(!el.is_void);
		assert!(el.attrs.is_empty());
		assert!(el.children.is_empty());
		assert!(el.key.is_none());
		assert!(!el.keyed);
	}

	#[rstest]
	#[case("br", true)]
	#[case("img", true)]
	#[case("input", true)]
	#[case("div", false)]
	#[case("td", false)]
	fn test_void_element_detection(#[case] tag: &'static str, #[case] expected: bool) {
		assert_eq!(ElementView::<Msg>::new(tag).is_void, expected);
	}

	#[rstest]
	fn test_attribute_splits_properties_and_listeners() {
		let el: ElementView<Msg> = ElementView::new("th")
			.attribute(Attribute::new("class", "name"))
			.attribute(Attribute::on(EventType::Click, || "clicked"));
		assert_eq!(el.attrs.len(), 1);
		assert_eq!(el.event_handlers.len(), 1);
		assert!(el.has_listener(EventType::Click));
		assert!(!el.has_listener(EventType::KeyDown));
	}

	#[rstest]
	fn test_get_attr_returns_last_value() {
		let el: ElementView<Msg> = ElementView::new("td")
			.attr("class", "first")
			.attr("class", "second");
		assert_eq!(el.get_attr("class"), Some("second"));
		assert_eq!(el.get_attr("id"), None);
	}

	#[rstest]
	fn test_dispatch_runs_matching_handlers_in_order() {
		let el: ElementView<Msg> = ElementView::new("button")
			.on_click(|| "first")
			.on(EventType::Focus, Callback::new(|_| "focus"))
			.on_click(|| "second");

		assert_eq!(el.dispatch(EventType::Click), vec!["first", "second"]);
		assert_eq!(el.dispatch(EventType::Focus), vec!["focus"]);
		assert!(el.dispatch(EventType::Blur).is_empty());
	}

	#[rstest]
	fn test_key_and_keyed_flags() {
		let el: ElementView<Msg> = ElementView::new("tbody")
			.keyed()
			.child(ElementView::new("tr").key("row-1"));
		assert!(el.is_keyed());
		let row = el.child_elements().next().unwrap();
		assert_eq!(row.key_value(), Some("row-1"));
	}

	#[rstest]
	fn test_render_simple_element() {
		let view: View<Msg> = ElementView::new("div").into_view();
		assert_eq!(view.render_to_string(), "<div></div>");
	}

	#[rstest]
	fn test_render_void_element() {
		let view: View<Msg> = ElementView::new("br").into_view();
		assert_eq!(view.render_to_string(), "<br />");
	}

	#[rstest]
	fn test_render_skips_listeners_and_keys() {
		let view: View<Msg> = ElementView::new("tr")
			.key("k")
			.on_click(|| "row")
			.attr("class", "row")
			.child("cell")
			.into_view();
		assert_eq!(view.render_to_string(), "<tr class=\"row\">cell</tr>");
	}

	#[rstest]
	fn test_render_element_with_children() {
		let view: View<Msg> = ElementView::new("div")
			.child("Hello, ")
			.child(ElementView::new("strong").child("World"))
			.into_view();
		assert_eq!(
			view.render_to_string(),
			"<div>Hello, <strong>World</strong></div>"
		);
	}

	#[rstest]
	fn test_render_text_with_escaping() {
		let view: View<Msg> = View::text("<script>alert('xss')</script>");
		assert_eq!(
			view.render_to_string(),
			"&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;"
		);
	}

	#[rstest]
	fn test_render_attribute_with_escaping() {
		let view: View<Msg> = ElementView::new("td").attr("title", "a \"b\"").into_view();
		assert_eq!(view.render_to_string(), "<td title=\"a &quot;b&quot;\"></td>");
	}

	#[rstest]
	fn test_render_fragment_and_empty() {
		let view: View<Msg> = View::fragment(["One", "Two", "Three"]);
		assert_eq!(view.render_to_string(), "OneTwoThree");
		assert_eq!(View::<Msg>::empty().render_to_string(), "");
	}

	#[rstest]
	fn test_into_view_option() {
		let some: View<Msg> = Some("Hello").into_view();
		let none: View<Msg> = None::<String>.into_view();
		assert_eq!(some.render_to_string(), "Hello");
		assert_eq!(none.render_to_string(), "");
	}

	#[rstest]
	fn test_text_content_is_unescaped() {
		let view: View<Msg> = ElementView::new("th")
			.child("A & B")
			.child(ElementView::new("span").child("!"))
			.into_view();
		assert_eq!(view.text_content(), "A & B!");
	}

	#[rstest]
	fn test_clone_preserves_handlers() {
		let el: ElementView<Msg> = ElementView::new("th").on_click(|| "sort");
		let cloned = el.clone();
		assert_eq!(cloned.dispatch(EventType::Click), vec!["sort"]);
	}

	#[rstest]
	fn test_html_escape() {
		assert_eq!(html_escape("Hello"), Cow::Borrowed("Hello"));
		assert_eq!(
			html_escape("a & b"),
			Cow::<str>::Owned("a &amp; b".to_string())
		);
	}
}
