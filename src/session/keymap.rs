use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Mode;
use crate::list::Direction;

/// Raw Ctrl+Y as delivered by terminals that do not report modifiers.
const RAW_CTRL_Y: char = '\u{19}';

/// Everything a keystroke can ask the session to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
	Quit,
	Move(Direction),
	ToggleSelection,
	CopyEntry,
	CopySelected,
	ToggleMask,
	EnterSearch,
	CancelSearch,
	SearchInput(char),
	SearchBackspace,
	ToggleLocal,
}

/// Translate a key press into an action for the given mode.
///
/// Keys with no meaning in the mode map to `None`.
#[must_use]
pub fn action_for(mode: &Mode, key: KeyEvent) -> Option<Action> {
	match mode {
		Mode::Normal => browse_action(key, false),
		Mode::Local => browse_action(key, true),
		Mode::Search(_) => search_action(key),
	}
}

fn browse_action(key: KeyEvent, local: bool) -> Option<Action> {
	if key.modifiers.contains(KeyModifiers::CONTROL) {
		return matches!(key.code, KeyCode::Char('c')).then_some(Action::Quit);
	}
	if key.modifiers.contains(KeyModifiers::ALT) {
		return None;
	}

	let action = match key.code {
		KeyCode::Char('q') => Action::Quit,
		KeyCode::Up | KeyCode::Char('k') => Action::Move(Direction::Up),
		KeyCode::Down | KeyCode::Char('j') => Action::Move(Direction::Down),
		KeyCode::Enter | KeyCode::Char(' ') => Action::ToggleSelection,
		KeyCode::Tab => Action::ToggleMask,
		KeyCode::Char('y') => Action::CopyEntry,
		KeyCode::Char('Y') => Action::CopySelected,
		KeyCode::Char('d') => Action::ToggleLocal,
		KeyCode::Esc if local => Action::ToggleLocal,
		KeyCode::Char('s' | '/') if !local => Action::EnterSearch,
		_ => return None,
	};
	Some(action)
}

fn search_action(key: KeyEvent) -> Option<Action> {
	let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
	let alt = key.modifiers.contains(KeyModifiers::ALT);

	let action = match key.code {
		KeyCode::Esc => Action::CancelSearch,
		KeyCode::Backspace => Action::SearchBackspace,
		KeyCode::Tab => Action::ToggleMask,
		KeyCode::Up => Action::Move(Direction::Up),
		KeyCode::Down => Action::Move(Direction::Down),
		KeyCode::Enter => Action::ToggleSelection,
		KeyCode::Char(ch) if ctrl => match ch.to_ascii_lowercase() {
			'c' => Action::Quit,
			'y' => Action::CopyEntry,
			'a' => Action::CopySelected,
			_ => return None,
		},
		KeyCode::Char(RAW_CTRL_Y) => Action::CopyEntry,
		KeyCode::Char(_) if alt => return None,
		KeyCode::Char(ch) if ch.is_control() => return None,
		KeyCode::Char(ch) => Action::SearchInput(ch),
		_ => return None,
	};
	Some(action)
}
