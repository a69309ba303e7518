//! Plain-text description of one rendered frame.
//!
//! The terminal renderer only styles and places these strings; all decisions
//! about what is visible are made here.

use std::fmt;

/// Whether headers use emoji or bracketed ASCII tags.
///
/// Defaults to ASCII; `detect` opts into emoji.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconStyle {
	Emoji,
	#[default]
	Ascii,
}

impl IconStyle {
	/// Detect terminals that can be trusted with emoji.
	#[must_use]
	pub fn detect() -> Self {
		const MODERN_TERMINAL_VARS: [&str; 3] = ["WT_SESSION", "TERM_PROGRAM", "COLORTERM"];
		if MODERN_TERMINAL_VARS
			.iter()
			.any(|var| std::env::var_os(var).is_some_and(|value| !value.is_empty()))
		{
			IconStyle::Emoji
		} else {
			IconStyle::Ascii
		}
	}

	pub(crate) fn pick(self, emoji: &'static str, ascii: &'static str) -> &'static str {
		match self {
			IconStyle::Emoji => emoji,
			IconStyle::Ascii => ascii,
		}
	}
}

/// Everything needed to draw the screen once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameView {
	pub header: String,
	pub body: Body,
	pub footer: Footer,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
	/// The windowed slice of the displayed list.
	Lines(Vec<DisplayLine>),
	/// A search that matched nothing.
	NoResults,
}

/// One visible row of a list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayLine {
	pub is_cursor: bool,
	pub selected: bool,
	/// Masked or plain entry text.
	pub text: String,
}

impl DisplayLine {
	#[must_use]
	pub fn symbol(&self) -> char {
		if self.is_cursor { '>' } else { ' ' }
	}

	#[must_use]
	pub fn check(&self) -> char {
		if self.selected { 'x' } else { ' ' }
	}
}

impl fmt::Display for DisplayLine {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} [{}] {}", self.symbol(), self.check(), self.text)
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Footer {
	/// `<cursor-total>` counter, one-based.
	pub position: String,
	/// Search prompt text, only while searching.
	pub search: Option<String>,
	pub hints: &'static str,
	pub status: Option<String>,
}

impl Body {
	#[must_use]
	pub fn lines(&self) -> &[DisplayLine] {
		match self {
			Body::Lines(lines) => lines,
			Body::NoResults => &[],
		}
	}
}

impl fmt::Display for FrameView {
	/// Text rendering used by tests and logs.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "{}", self.header)?;
		writeln!(f)?;
		match &self.body {
			Body::Lines(lines) => {
				for line in lines {
					writeln!(f, "{line}")?;
				}
			}
			Body::NoResults => writeln!(f, "{NO_RESULTS}")?,
		}
		writeln!(f, "{}", self.footer.position)?;
		if let Some(search) = &self.footer.search {
			writeln!(f, "{search}")?;
		}
		writeln!(f, "{}", self.footer.hints)?;
		write!(f, "{}", self.footer.status.as_deref().unwrap_or_default())
	}
}

pub const NO_RESULTS: &str = "No results found";

pub(crate) const NORMAL_HINTS: &str =
	"[↑/↓] Navigate [↵] Select  [y/Y] Copy (one/all)  [tab] Toggle  [s] Search  [d] Local  [q] Quit";
pub(crate) const SEARCH_HINTS: &str =
	"[↑/↓] Navigate [↵] Select (space types) [ctrl+y/ctrl+a] Copy (one/all) [tab] Toggle [esc] Back";
pub(crate) const LOCAL_HINTS: &str =
	"[↑/↓] Navigate [↵] Select [y/Y] Copy (one/all) [tab] Toggle [d] Global  [q] Quit";

/// One-based position counter; `<0-0>` for an empty view.
pub(crate) fn position(cursor: usize, total: usize) -> String {
	if total == 0 {
		"<0-0>".to_string()
	} else {
		format!("<{}-{}>", cursor + 1, total)
	}
}
