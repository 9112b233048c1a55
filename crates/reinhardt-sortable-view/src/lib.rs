//! Reinhardt Sortable View - markup trees for table components
//!
//! A small, platform independent description of HTML that components return
//! and host runtimes commit. Every tree is generic over the host's message
//! type, so listeners produce the host's own messages instead of mutating
//! shared state.
//!
//! ## Architecture
//!
//! - [`view`]: [`View`] and [`ElementView`], HTML string rendering and event dispatch
//! - [`attribute`]: [`Attribute`] lists (properties and listeners) and [`EventType`]
//! - [`callback`]: cloneable [`Callback`] wrapper
//! - [`html`]: element builders (`table`, `thead`, `tbody`, `tr`, `th`, `td`, `span`)
//!
//! ## Example
//!
//! ```
//! use reinhardt_sortable_view::{EventType, IntoView, View};
//! use reinhardt_sortable_view::html::th;
//!
//! #[derive(Debug, PartialEq)]
//! enum Msg {
//!     HeaderClicked,
//! }
//!
//! let header = th().on_click(|| Msg::HeaderClicked).child("Name");
//! assert_eq!(header.dispatch(EventType::Click), vec![Msg::HeaderClicked]);
//!
//! let view: View<Msg> = header.into_view();
//! assert_eq!(view.render_to_string(), "<th>Name</th>");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod attribute;
pub mod callback;
pub mod html;
pub mod view;

// Re-exports for convenience
pub use attribute::{Attribute, EventType};
pub use callback::Callback;
pub use view::{ElementView, IntoView, View};
