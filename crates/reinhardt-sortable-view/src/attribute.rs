//! Element attributes and event listeners.
//!
//! An [`Attribute`] is either a plain property (`class="striped"`) or an event
//! listener producing a host message. Attribute lists are applied to an
//! [`ElementView`](crate::ElementView) in order, so the same list can be
//! shared by every cell of a column or every row of a table.

use std::borrow::Cow;
use std::fmt;

use crate::callback::Callback;

/// DOM events a listener can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
	/// Mouse click (or keyboard activation).
	Click,
	/// Double click.
	DoubleClick,
	/// Pointer entered the element.
	MouseEnter,
	/// Pointer left the element.
	MouseLeave,
	/// Key pressed while the element has focus.
	KeyDown,
	/// Element received focus.
	Focus,
	/// Element lost focus.
	Blur,
}

impl EventType {
	/// Returns the DOM event name (e.g. `"click"`).
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Click => "click",
			Self::DoubleClick => "dblclick",
			Self::MouseEnter => "mouseenter",
			Self::MouseLeave => "mouseleave",
			Self::KeyDown => "keydown",
			Self::Focus => "focus",
			Self::Blur => "blur",
		}
	}
}

impl fmt::Display for EventType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A single attribute applied to an element.
pub enum Attribute<Msg> {
	/// A `name="value"` property.
	Property {
		/// Attribute name.
		name: Cow<'static, str>,
		/// Attribute value (escaped on render).
		value: Cow<'static, str>,
	},
	/// An event listener producing a host message.
	Listener {
		/// Event the listener reacts to.
		event: EventType,
		/// Handler invoked when the event is dispatched.
		handler: Callback<(), Msg>,
	},
}

impl<Msg> Attribute<Msg> {
	/// Creates a property attribute.
	pub fn new(name: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Self {
		Self::Property {
			name: name.into(),
			value: value.into(),
		}
	}

	/// Creates a listener attribute for `event`.
	pub fn on<F>(event: EventType, handler: F) -> Self
	where
		F: Fn() -> Msg + Send + Sync + 'static,
	{
		Self::Listener {
			event,
			handler: Callback::new(move |()| handler()),
		}
	}

	/// Returns the property name, or `None` for listeners.
	pub fn name(&self) -> Option<&str> {
		match self {
			Self::Property { name, .. } => Some(&**name),
			Self::Listener { .. } => None,
		}
	}

	/// Returns the property value, or `None` for listeners.
	pub fn value(&self) -> Option<&str> {
		match self {
			Self::Property { value, .. } => Some(&**value),
			Self::Listener { .. } => None,
		}
	}

	/// Returns `true` if this attribute is an event listener.
	pub fn is_listener(&self) -> bool {
		matches!(self, Self::Listener { .. })
	}
}

impl<Msg> Clone for Attribute<Msg> {
	fn clone(&self) -> Self {
		match self {
			Self::Property { name, value } => Self::Property {
				name: name.clone(),
				value: value.clone(),
			},
			Self::Listener { event, handler } => Self::Listener {
				event: *event,
				handler: handler.clone(),
			},
		}
	}
}

impl<Msg> fmt::Debug for Attribute<Msg> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Property { name, value } => f
				.debug_struct("Property")
				.field("name", name)
				.field("value", value)
				.finish(),
			Self::Listener { event, .. } => f
				.debug_struct("Listener")
				.field("event", event)
				.finish_non_exhaustive(),
		}
	}
}

/// Shorthand for [`Attribute::new`].
pub fn attr<Msg>(
	name: impl Into<Cow<'static, str>>,
	value: impl Into<Cow<'static, str>>,
) -> Attribute<Msg> {
	Attribute::new(name, value)
}

/// Creates a `class` attribute.
pub fn class<Msg>(value: impl Into<Cow<'static, str>>) -> Attribute<Msg> {
	Attribute::new("class", value)
}

/// Creates an `id` attribute.
pub fn id<Msg>(value: impl Into<Cow<'static, str>>) -> Attribute<Msg> {
	Attribute::new("id", value)
}

/// Creates a `style` attribute.
pub fn style<Msg>(value: impl Into<Cow<'static, str>>) -> Attribute<Msg> {
	Attribute::new("style", value)
}

/// Creates a click listener.
pub fn on_click<Msg, F>(handler: F) -> Attribute<Msg>
where
	F: Fn() -> Msg + Send + Sync + 'static,
{
	Attribute::on(EventType::Click, handler)
}
