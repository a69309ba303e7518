use std::fmt;

/// One `KEY=VALUE` string as it was loaded.
///
/// The value may be empty or contain further `=` characters; only the first
/// `=` separates key from value. Entries without any `=` are kept verbatim and
/// report no value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry(String);

impl Entry {
	pub fn new(raw: impl Into<String>) -> Self {
		Self(raw.into())
	}

	/// Build an entry from a separate key and value.
	pub fn from_pair(key: &str, value: &str) -> Self {
		Self(format!("{key}={value}"))
	}

	/// The raw `KEY=VALUE` text.
	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Split into key and value on the first `=`.
	#[must_use]
	pub fn split(&self) -> Option<(&str, &str)> {
		self.0.split_once('=')
	}

	/// The key portion; the whole text when there is no `=`.
	#[must_use]
	pub fn key(&self) -> &str {
		self.split().map_or(self.0.as_str(), |(key, _)| key)
	}

	#[must_use]
	pub fn value(&self) -> Option<&str> {
		self.split().map(|(_, value)| value)
	}
}

impl fmt::Display for Entry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for Entry {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<String> for Entry {
	fn from(raw: String) -> Self {
		Self(raw)
	}
}

impl From<&str> for Entry {
	fn from(raw: &str) -> Self {
		Self(raw.to_string())
	}
}

/// Convert a list of raw strings into entries, preserving order.
pub fn entries_from<I, S>(raw: I) -> Vec<Entry>
where
	I: IntoIterator<Item = S>,
	S: Into<String>,
{
	raw.into_iter().map(|item| Entry::new(item)).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splits_on_first_equals_only() {
		let entry = Entry::new("DATABASE_URL=postgres://u:p@h/db?sslmode=require");
		assert_eq!(entry.key(), "DATABASE_URL");
		assert_eq!(entry.value(), Some("postgres://u:p@h/db?sslmode=require"));
	}

	#[test]
	fn empty_value_is_still_a_value() {
		let entry = Entry::new("EMPTY=");
		assert_eq!(entry.key(), "EMPTY");
		assert_eq!(entry.value(), Some(""));
	}

	#[test]
	fn missing_separator_has_no_value() {
		let entry = Entry::new("MALFORMED");
		assert_eq!(entry.key(), "MALFORMED");
		assert_eq!(entry.value(), None);
	}

	#[test]
	fn from_pair_joins_with_equals() {
		assert_eq!(Entry::from_pair("PORT", "3000").as_str(), "PORT=3000");
	}
}
