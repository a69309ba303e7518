//! Value masking and the key-name heuristic for sensitive entries.

use std::borrow::Cow;

/// Character used to mask values unless configured otherwise.
pub const DEFAULT_MASK_CHAR: char = '*';

/// Key fragments that mark an entry as sensitive by default.
pub const DEFAULT_SENSITIVE_PATTERNS: [&str; 3] = ["key", "secret", "private"];

/// Produce the display text for `entry`.
///
/// When either flag is set, the value after the first `=` is replaced by one
/// `mask_char` per character of the value. The key is always shown as-is and
/// entries without `=` are returned unchanged.
#[must_use]
pub fn mask(entry: &str, hide_global: bool, hide_forced: bool, mask_char: char) -> Cow<'_, str> {
	if !(hide_global || hide_forced) {
		return Cow::Borrowed(entry);
	}

	let Some((key, value)) = entry.split_once('=') else {
		return Cow::Borrowed(entry);
	};

	let mut masked = String::with_capacity(key.len() + 1 + value.len());
	masked.push_str(key);
	masked.push('=');
	masked.extend(std::iter::repeat_n(mask_char, value.chars().count()));
	Cow::Owned(masked)
}

/// Decides which entries are always masked, based on their key name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SensitivityRule {
	patterns: Vec<String>,
}

impl Default for SensitivityRule {
	fn default() -> Self {
		Self::new(DEFAULT_SENSITIVE_PATTERNS)
	}
}

impl SensitivityRule {
	/// Patterns are matched case-insensitively; blank patterns are dropped.
	pub fn new<I, S>(patterns: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let patterns = patterns
			.into_iter()
			.map(|pattern| pattern.as_ref().trim().to_lowercase())
			.filter(|pattern| !pattern.is_empty())
			.collect();
		Self { patterns }
	}

	#[must_use]
	pub fn patterns(&self) -> &[String] {
		&self.patterns
	}

	/// Whether the key of `entry` contains any pattern.
	///
	/// Entries without `=` are never sensitive since they have no value to hide.
	#[must_use]
	pub fn is_sensitive(&self, entry: &str) -> bool {
		let Some((key, _)) = entry.split_once('=') else {
			return false;
		};
		let key = key.to_lowercase();
		self.patterns
			.iter()
			.any(|pattern| key.contains(pattern.as_str()))
	}
}
