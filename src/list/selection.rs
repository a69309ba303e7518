use std::collections::BTreeSet;

use super::filter::{FilteredView, filter};
use super::mask::SensitivityRule;
use super::{Direction, Entry};

/// An ordered entry list with a cursor, a multi-selection and the set of
/// entries whose values are always masked.
///
/// `selected` and `sensitive` hold indices into `entries`, never into a
/// filtered view, so a selection made while searching is still there once
/// the search is cleared.
#[derive(Clone, Debug, Default)]
pub struct SelectionList {
	entries: Vec<Entry>,
	cursor: usize,
	selected: BTreeSet<usize>,
	sensitive: BTreeSet<usize>,
}

impl SelectionList {
	/// Build a list and flag sensitive entries with `rule`.
	pub fn new(entries: Vec<Entry>, rule: &SensitivityRule) -> Self {
		let sensitive = entries
			.iter()
			.enumerate()
			.filter(|(_, entry)| rule.is_sensitive(entry.as_str()))
			.map(|(index, _)| index)
			.collect();

		Self {
			entries,
			cursor: 0,
			selected: BTreeSet::new(),
			sensitive,
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	#[must_use]
	pub fn entries(&self) -> &[Entry] {
		&self.entries
	}

	#[must_use]
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Entry under the cursor of the unfiltered view.
	#[must_use]
	pub fn current(&self) -> Option<&Entry> {
		self.entries.get(self.cursor)
	}

	/// Filtered view of this list; an empty term shows everything.
	#[must_use]
	pub fn view(&self, term: &str) -> FilteredView<'_> {
		filter(&self.entries, term)
	}

	/// Move the unfiltered cursor one step, stopping at either end.
	pub fn move_cursor(&mut self, direction: Direction) {
		self.cursor = step_cursor(self.cursor, direction, self.entries.len());
	}

	#[must_use]
	pub fn is_selected(&self, index: usize) -> bool {
		self.selected.contains(&index)
	}

	#[must_use]
	pub fn is_sensitive(&self, index: usize) -> bool {
		self.sensitive.contains(&index)
	}

	#[must_use]
	pub fn selected_count(&self) -> usize {
		self.selected.len()
	}

	/// Flip selection of the entry at `index` in the source list.
	///
	/// Indices past the end are ignored.
	pub fn toggle(&mut self, index: usize) {
		if index >= self.entries.len() {
			return;
		}
		if !self.selected.remove(&index) {
			self.selected.insert(index);
		}
	}

	/// Flip selection of the entry shown at `displayed` in the view produced
	/// by `term`.
	pub fn toggle_displayed(&mut self, term: &str, displayed: usize) {
		if let Some(index) = self.view(term).original_index(displayed) {
			self.toggle(index);
		}
	}

	/// Selected entries in list order.
	pub fn selected_entries(&self) -> impl Iterator<Item = &Entry> + '_ {
		self.selected
			.iter()
			.filter_map(|&index| self.entries.get(index))
	}
}

/// Move `cursor` one step within `[0, len)` without wrapping.
///
/// A cursor already past the end is first pulled back inside the range.
#[must_use]
pub fn step_cursor(cursor: usize, direction: Direction, len: usize) -> usize {
	let cursor = clamp_cursor(cursor, len);
	match direction {
		Direction::Up => cursor.saturating_sub(1),
		Direction::Down if cursor + 1 < len => cursor + 1,
		Direction::Down => cursor,
	}
}

/// Clamp `cursor` to the last valid index, or 0 for an empty view.
#[must_use]
pub fn clamp_cursor(cursor: usize, len: usize) -> usize {
	cursor.min(len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::list::entries_from;

	fn list(raw: &[&str]) -> SelectionList {
		SelectionList::new(entries_from(raw.iter().copied()), &SensitivityRule::default())
	}

	#[test]
	fn sensitive_entries_are_flagged_at_construction() {
		let list = list(&["HOME=/root", "API_KEY=abc123", "JWT_SECRET=s"]);
		assert!(!list.is_sensitive(0));
		assert!(list.is_sensitive(1));
		assert!(list.is_sensitive(2));
	}

	#[test]
	fn cursor_stops_at_both_ends() {
		let mut list = list(&["A=1", "B=2", "C=3"]);
		list.move_cursor(Direction::Up);
		assert_eq!(list.cursor(), 0);
		for _ in 0..5 {
			list.move_cursor(Direction::Down);
		}
		assert_eq!(list.cursor(), 2);
	}

	#[test]
	fn empty_list_pins_cursor_to_zero() {
		let mut list = list(&[]);
		list.move_cursor(Direction::Down);
		list.move_cursor(Direction::Up);
		assert_eq!(list.cursor(), 0);
		assert!(list.current().is_none());
	}

	#[test]
	fn single_entry_list_tolerates_every_operation() {
		let mut list = list(&["ONLY=1"]);
		list.move_cursor(Direction::Up);
		list.move_cursor(Direction::Down);
		assert_eq!(list.cursor(), 0);
		list.toggle_displayed("", 0);
		assert!(list.is_selected(0));
		list.toggle_displayed("", 0);
		assert!(!list.is_selected(0));
	}

	#[test]
	fn toggle_ignores_out_of_range_indices() {
		let mut list = list(&["A=1"]);
		list.toggle(7);
		list.toggle_displayed("", 3);
		assert_eq!(list.selected_count(), 0);
	}

	#[test]
	fn filtered_toggle_selects_original_index() {
		let mut list = list(&["HOME=/root", "API_KEY=abc123", "PATH=/bin"]);
		list.toggle_displayed("key", 0);
		assert!(list.is_selected(1));
		assert!(list.view("").iter().any(|(i, _)| list.is_selected(i)));
		assert_eq!(list.selected_count(), 1);
	}

	#[test]
	fn selected_entries_follow_list_order() {
		let mut list = list(&["A=1", "B=2", "C=3"]);
		list.toggle(2);
		list.toggle(0);
		let selected: Vec<_> = list.selected_entries().map(Entry::as_str).collect();
		assert_eq!(selected, ["A=1", "C=3"]);
	}

	#[test]
	fn step_cursor_pulls_stale_cursor_back() {
		assert_eq!(step_cursor(9, Direction::Down, 3), 2);
		assert_eq!(step_cursor(9, Direction::Up, 3), 1);
		assert_eq!(step_cursor(4, Direction::Down, 0), 0);
	}
}
