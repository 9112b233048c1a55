//! Markup trees returned by components
//!
//! This module provides access to reinhardt-sortable-view, the small HTML
//! description the table renders into.
//!
//! ## Architecture
//!
//! - **Views**: `View` and `ElementView` trees, generic over the host message type
//! - **Attributes**: properties and event listeners applied in order
//! - **Dispatch**: `ElementView::dispatch` runs listeners and returns host messages
//!
//! ## Example
//!
//! ```
//! use reinhardt_sortable::view::html::{span, td};
//! use reinhardt_sortable::view::{IntoView, View};
//!
//! let cell: View<()> = td().child(span().child("42")).into_view();
//! assert_eq!(cell.render_to_string(), "<td><span>42</span></td>");
//! ```

// Re-export all reinhardt-sortable-view functionality
pub use reinhardt_sortable_view::*;
