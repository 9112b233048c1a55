//! Callback type shared by event listeners and sort handlers.
//!
//! [`Callback`] wraps a function in an `Arc`, making it cheaply cloneable while
//! providing a stable reference that does not change between renders. Markup
//! trees hold `Callback<(), Msg>` for their listeners, and table columns hold
//! `Callback<SortState, Msg>` to turn a sort intent into a host message.
//!
//! ## Example
//!
//! ```
//! use reinhardt_sortable_view::Callback;
//!
//! let double = Callback::new(|x: i32| x * 2);
//! assert_eq!(double.call(21), 42);
//! ```

use std::sync::Arc;

/// A type-safe, cloneable callback wrapper.
///
/// ## Type Parameters
///
/// - `Args`: The argument type the callback receives (defaults to `()`)
/// - `Ret`: The return type of the callback (defaults to `()`)
pub struct Callback<Args = (), Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + Send + Sync + 'static>,
}

impl<Args, Ret> Callback<Args, Ret> {
	/// Creates a new Callback from a function or closure.
	///
	/// # Arguments
	///
	/// * `f` - The function or closure to wrap
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + Send + Sync + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Calls the callback with the given arguments.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}

	/// Returns `true` if both callbacks wrap the same function instance.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

impl<Ret> Callback<(), Ret> {
	/// Calls a callback that takes no arguments.
	pub fn emit(&self) -> Ret {
		(self.inner)(())
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> std::fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}
