//! Formatting of clipboard exports and the status lines they produce.
//!
//! Exports always carry the raw `KEY=VALUE` text; masking is a display
//! concern only.

use crate::clipboard::Clipboard;
use crate::list::{Entry, SelectionList};

pub const NOTHING_SELECTED: &str = "No variables selected to copy";
pub const NOTHING_TO_COPY: &str = "Nothing to copy";
const CLIPBOARD_FAILED: &str = "Failed to copy to clipboard:";

/// Newline-joined raw text of every selected entry, in list order, with the
/// number of entries it contains. `None` when nothing is selected.
#[must_use]
pub fn batch_text(list: &SelectionList) -> Option<(String, usize)> {
	let selected: Vec<&str> = list.selected_entries().map(Entry::as_str).collect();
	if selected.is_empty() {
		return None;
	}
	Some((selected.join("\n"), selected.len()))
}

/// Copy a single entry and describe the outcome.
pub fn copy_entry(entry: Option<&Entry>, clipboard: &mut dyn Clipboard) -> String {
	let Some(entry) = entry else {
		return NOTHING_TO_COPY.to_string();
	};

	match clipboard.write(entry.as_str()) {
		Ok(()) => {
			tracing::info!(key = entry.key(), "copied variable");
			format!("Copied {} to clipboard", entry.key())
		}
		Err(err) => failure(&err),
	}
}

/// Copy every selected entry of `list` and describe the outcome.
///
/// The clipboard is left untouched when nothing is selected.
pub fn copy_selected(list: &SelectionList, clipboard: &mut dyn Clipboard) -> String {
	let Some((text, count)) = batch_text(list) else {
		return NOTHING_SELECTED.to_string();
	};

	match clipboard.write(&text) {
		Ok(()) => {
			tracing::info!(count, "copied selected variables");
			copied_status(count)
		}
		Err(err) => failure(&err),
	}
}

fn copied_status(count: usize) -> String {
	if count == 1 {
		"Copied 1 variable to clipboard".to_string()
	} else {
		format!("Copied {count} variables to clipboard")
	}
}

fn failure(err: &dyn std::error::Error) -> String {
	tracing::warn!(error = %err, "clipboard write failed");
	format!("{CLIPBOARD_FAILED} {err}")
}
