use std::fmt;

/// Which pane the user is looking at and how keys are interpreted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
	/// Browsing the process environment.
	#[default]
	Normal,
	/// Live substring filter over the process environment.
	Search(SearchState),
	/// Browsing the variables loaded from the local file.
	Local,
}

/// State that only exists while a search is open.
///
/// The cursor indexes the filtered view, so moving it never disturbs the
/// cursor of the underlying list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
	pub term: String,
	pub cursor: usize,
}

impl SearchState {
	/// Append typed text and restart review from the first result.
	pub fn push(&mut self, ch: char) {
		self.term.push(ch);
		self.cursor = 0;
	}

	/// Drop the last character and restart from the first result.
	pub fn pop(&mut self) {
		self.term.pop();
		self.cursor = 0;
	}
}

impl Mode {
	#[must_use]
	pub fn search(&self) -> Option<&SearchState> {
		match self {
			Mode::Search(search) => Some(search),
			_ => None,
		}
	}

	/// Term the primary list is currently filtered by.
	#[must_use]
	pub fn term(&self) -> &str {
		self.search().map_or("", |search| search.term.as_str())
	}
}

impl fmt::Display for Mode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Mode::Normal => "normal",
			Mode::Search(_) => "search",
			Mode::Local => "local",
		};
		f.write_str(name)
	}
}
