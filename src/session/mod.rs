//! Interactive session: the two lists, the current mode and the keystroke
//! state machine that drives them.

mod export;
mod frame;
mod keymap;
mod mode;

#[cfg(test)]
mod tests;

use ratatui::crossterm::event::KeyEvent;

use crate::clipboard::Clipboard;
use crate::list::{
	DEFAULT_MASK_CHAR, Entry, SelectionList, SensitivityRule, clamp_cursor, mask, step_cursor,
	visible_range,
};

pub use export::{NOTHING_SELECTED, NOTHING_TO_COPY, batch_text};
pub use frame::{Body, DisplayLine, Footer, FrameView, IconStyle, NO_RESULTS};
pub use keymap::{Action, action_for};
pub use mode::{Mode, SearchState};

use frame::{LOCAL_HINTS, NORMAL_HINTS, SEARCH_HINTS, position};

/// What the event loop should do after a keystroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
	Continue,
	Quit,
}

/// Display settings threaded into every frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOptions {
	/// Initial state of the global "hide values" toggle.
	pub hide_values: bool,
	pub mask_char: char,
	pub icons: IconStyle,
	pub sensitivity: SensitivityRule,
	/// Name of the local file, used in headers and messages.
	pub local_label: String,
}

impl Default for SessionOptions {
	fn default() -> Self {
		Self {
			hide_values: false,
			mask_char: DEFAULT_MASK_CHAR,
			icons: IconStyle::default(),
			sensitivity: SensitivityRule::default(),
			local_label: ".env".to_string(),
		}
	}
}

/// The whole interactive state, owned by the event loop.
#[derive(Debug)]
pub struct Session {
	primary: SelectionList,
	secondary: SelectionList,
	mode: Mode,
	hide_values: bool,
	mask_char: char,
	icons: IconStyle,
	local_label: String,
	status: Option<String>,
}

impl Session {
	pub fn new(primary: Vec<Entry>, secondary: Vec<Entry>, options: SessionOptions) -> Self {
		let SessionOptions {
			hide_values,
			mask_char,
			icons,
			sensitivity,
			local_label,
		} = options;

		Self {
			primary: SelectionList::new(primary, &sensitivity),
			secondary: SelectionList::new(secondary, &sensitivity),
			mode: Mode::Normal,
			hide_values,
			mask_char,
			icons,
			local_label,
			status: None,
		}
	}

	/// Show `status` until the next keystroke.
	#[must_use]
	pub fn with_status(mut self, status: Option<String>) -> Self {
		self.status = status;
		self
	}

	#[must_use]
	pub fn mode(&self) -> &Mode {
		&self.mode
	}

	#[must_use]
	pub fn primary(&self) -> &SelectionList {
		&self.primary
	}

	#[must_use]
	pub fn secondary(&self) -> &SelectionList {
		&self.secondary
	}

	#[must_use]
	pub fn hide_values(&self) -> bool {
		self.hide_values
	}

	#[must_use]
	pub fn status(&self) -> Option<&str> {
		self.status.as_deref()
	}

	/// Process one key press. The previous status message is always cleared
	/// first, even for keys that do nothing in the current mode.
	pub fn handle_key(&mut self, key: KeyEvent, clipboard: &mut dyn Clipboard) -> Flow {
		self.status = None;
		match action_for(&self.mode, key) {
			Some(action) => self.apply(action, clipboard),
			None => Flow::Continue,
		}
	}

	/// Apply an already decoded action.
	pub fn apply(&mut self, action: Action, clipboard: &mut dyn Clipboard) -> Flow {
		match action {
			Action::Quit => return Flow::Quit,
			Action::Move(direction) => match &mut self.mode {
				Mode::Normal => self.primary.move_cursor(direction),
				Mode::Local => self.secondary.move_cursor(direction),
				Mode::Search(search) => {
					let len = self.primary.view(&search.term).len();
					search.cursor = step_cursor(search.cursor, direction, len);
				}
			},
			Action::ToggleSelection => match &self.mode {
				Mode::Normal => self.primary.toggle(self.primary.cursor()),
				Mode::Local => self.secondary.toggle(self.secondary.cursor()),
				Mode::Search(search) => self.primary.toggle_displayed(&search.term, search.cursor),
			},
			Action::CopyEntry => {
				let entry = match &self.mode {
					Mode::Normal => self.primary.current(),
					Mode::Local => self.secondary.current(),
					Mode::Search(search) => self.primary.view(&search.term).get(search.cursor),
				};
				self.status = Some(export::copy_entry(entry, clipboard));
			}
			Action::CopySelected => {
				let list = match self.mode {
					Mode::Local => &self.secondary,
					_ => &self.primary,
				};
				self.status = Some(export::copy_selected(list, clipboard));
			}
			Action::ToggleMask => self.hide_values = !self.hide_values,
			Action::EnterSearch => self.transition(Mode::Search(SearchState::default())),
			Action::CancelSearch => self.transition(Mode::Normal),
			Action::SearchInput(ch) => {
				if let Mode::Search(search) = &mut self.mode {
					search.push(ch);
				}
			}
			Action::SearchBackspace => {
				if let Mode::Search(search) = &mut self.mode {
					search.pop();
				}
			}
			Action::ToggleLocal => match self.mode {
				Mode::Local => self.transition(Mode::Normal),
				_ if self.secondary.is_empty() => {
					tracing::debug!("rejected local view without local variables");
					self.status = Some(format!(
						"No variables loaded from {}",
						self.local_label
					));
				}
				_ => self.transition(Mode::Local),
			},
		}
		Flow::Continue
	}

	fn transition(&mut self, next: Mode) {
		tracing::debug!(from = %self.mode, to = %next, "mode change");
		self.mode = next;
	}

	/// Build the frame for a list viewport of `height` rows.
	#[must_use]
	pub fn frame(&self, height: usize) -> FrameView {
		let (header, hints) = match self.mode {
			Mode::Normal => (
				format!(
					"{} Environment Variables:",
					self.icons.pick("📋", "[ENV]")
				),
				NORMAL_HINTS,
			),
			Mode::Search(_) => (
				format!("{} Search Results:", self.icons.pick("🔍", "[S]")),
				SEARCH_HINTS,
			),
			Mode::Local => (
				format!(
					"{} Local {} file:",
					self.icons.pick("📁", "[LOCAL]"),
					self.local_label
				),
				LOCAL_HINTS,
			),
		};

		let (list, cursor) = match &self.mode {
			Mode::Normal => (&self.primary, self.primary.cursor()),
			Mode::Local => (&self.secondary, self.secondary.cursor()),
			Mode::Search(search) => (&self.primary, search.cursor),
		};
		let view = list.view(self.mode.term());
		let cursor = clamp_cursor(cursor, view.len());

		let body = if view.is_empty() && self.mode.search().is_some() {
			Body::NoResults
		} else {
			let (start, end) = visible_range(cursor, view.len(), height);
			let lines = view
				.iter()
				.enumerate()
				.skip(start)
				.take(end - start)
				.map(|(displayed, (original, entry))| DisplayLine {
					is_cursor: displayed == cursor,
					selected: list.is_selected(original),
					text: mask(
						entry.as_str(),
						self.hide_values,
						list.is_sensitive(original),
						self.mask_char,
					)
					.into_owned(),
				})
				.collect();
			Body::Lines(lines)
		};

		FrameView {
			header,
			body,
			footer: Footer {
				position: position(cursor, view.len()),
				search: self
					.mode
					.search()
					.map(|search| format!("Search mode: {}", search.term)),
				hints,
				status: self.status.clone(),
			},
		}
	}
}
