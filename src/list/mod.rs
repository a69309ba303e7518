//! The navigable, filterable, multi-selectable list that backs each pane.
//!
//! Everything in here is pure data manipulation. Rendering, key handling and
//! clipboard access live in [`crate::session`] and [`crate::ui`].

mod entry;
mod filter;
mod mask;
mod selection;
mod window;

pub use entry::{Entry, entries_from};
pub use filter::{FilteredView, filter};
pub use mask::{DEFAULT_MASK_CHAR, DEFAULT_SENSITIVE_PATTERNS, SensitivityRule, mask};
pub use selection::{SelectionList, clamp_cursor, step_cursor};
pub use window::visible_range;

/// Cursor movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
	Up,
	Down,
}
