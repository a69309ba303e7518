//! Substring filtering over a list of entries.
//!
//! The filter holds no state: every call scans the full entry list again and
//! returns a fresh view that borrows from it.

use super::Entry;

/// A filtered projection of a list together with the originating indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredView<'a> {
	entries: Vec<&'a Entry>,
	index_map: Vec<usize>,
}

impl<'a> FilteredView<'a> {
	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Displayed entries in scan order.
	#[must_use]
	pub fn entries(&self) -> &[&'a Entry] {
		&self.entries
	}

	/// `index_map()[i]` is the position of `entries()[i]` in the source list.
	#[must_use]
	pub fn index_map(&self) -> &[usize] {
		&self.index_map
	}

	#[must_use]
	pub fn get(&self, displayed: usize) -> Option<&'a Entry> {
		self.entries.get(displayed).copied()
	}

	/// Map a displayed position back to the source list.
	#[must_use]
	pub fn original_index(&self, displayed: usize) -> Option<usize> {
		self.index_map.get(displayed).copied()
	}

	/// Iterate `(original_index, entry)` pairs in displayed order.
	pub fn iter(&self) -> impl Iterator<Item = (usize, &'a Entry)> + '_ {
		self.index_map
			.iter()
			.copied()
			.zip(self.entries.iter().copied())
	}
}

/// Keep the entries whose full `KEY=VALUE` text contains `term`, ignoring case.
///
/// An empty term keeps everything in the original order.
#[must_use]
pub fn filter<'a>(entries: &'a [Entry], term: &str) -> FilteredView<'a> {
	let needle = term.to_lowercase();
	let (index_map, entries) = entries
		.iter()
		.enumerate()
		.filter(|(_, entry)| needle.is_empty() || entry.as_str().to_lowercase().contains(&needle))
		.unzip();

	FilteredView { entries, index_map }
}
