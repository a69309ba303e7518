use ratatui::style::{Color, Modifier, Style};

/// Styles applied to the plain-text frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Style for the mode header.
	pub header: Style,
	/// Style for the row under the cursor.
	pub cursor: Style,
	/// Style for the `x` of a selected row not under the cursor.
	pub check: Style,
	/// Style for the search prompt border.
	pub prompt_border: Style,
	/// Style for the block cursor at the end of the search term.
	pub prompt_cursor: Style,
	/// Style for the "no results" message.
	pub empty: Style,
	/// Style for key hints and the position counter.
	pub hint: Style,
	/// Style for the transient status line.
	pub status: Style,
}

impl Default for Theme {
	fn default() -> Self {
		let accent = Color::Indexed(204);
		Self {
			header: Style::new().add_modifier(Modifier::BOLD),
			cursor: Style::new().fg(accent),
			check: Style::new().fg(accent),
			prompt_border: Style::new().fg(Color::Indexed(245)),
			prompt_cursor: Style::new().fg(accent),
			empty: Style::new().fg(Color::DarkGray),
			hint: Style::new().fg(Color::Gray),
			status: Style::new().fg(Color::Green),
		}
	}
}

impl Theme {
	/// Theme without any colors, for terminals that asked for none.
	#[must_use]
	pub fn monochrome() -> Self {
		Self {
			header: Style::new().add_modifier(Modifier::BOLD),
			cursor: Style::new().add_modifier(Modifier::REVERSED),
			check: Style::new(),
			prompt_border: Style::new(),
			prompt_cursor: Style::new(),
			empty: Style::new(),
			hint: Style::new(),
			status: Style::new().add_modifier(Modifier::BOLD),
		}
	}

	/// Pick the colored or monochrome theme, honoring `NO_COLOR`.
	#[must_use]
	pub fn detect() -> Self {
		if std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty()) {
			Self::monochrome()
		} else {
			Self::default()
		}
	}
}
