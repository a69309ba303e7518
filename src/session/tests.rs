use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;
use crate::clipboard::ClipboardError;
use crate::list::entries_from;

#[derive(Default)]
struct Recorder {
	writes: Vec<String>,
}

impl Clipboard for Recorder {
	fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
		self.writes.push(text.to_string());
		Ok(())
	}
}

struct Harness {
	session: Session,
	clipboard: Recorder,
}

impl Harness {
	fn new(primary: &[&str], secondary: &[&str]) -> Self {
		let session = Session::new(
			entries_from(primary.iter().copied()),
			entries_from(secondary.iter().copied()),
			SessionOptions::default(),
		);
		Self {
			session,
			clipboard: Recorder::default(),
		}
	}

	fn key(&mut self, code: KeyCode) -> Flow {
		self.press(KeyEvent::new(code, KeyModifiers::NONE))
	}

	fn ctrl(&mut self, ch: char) -> Flow {
		self.press(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
	}

	fn press(&mut self, key: KeyEvent) -> Flow {
		self.session.handle_key(key, &mut self.clipboard)
	}

	fn type_text(&mut self, text: &str) {
		for ch in text.chars() {
			self.key(KeyCode::Char(ch));
		}
	}

	fn lines(&self) -> Vec<String> {
		self.session
			.frame(20)
			.body
			.lines()
			.iter()
			.map(|line| line.text.clone())
			.collect()
	}
}

const SAMPLE: [&str; 3] = ["HOME=/root", "API_KEY=abc123", "PATH=/bin"];

#[test]
fn sensitive_values_are_masked_without_global_toggle() {
	let harness = Harness::new(&["HOME=/root", "API_KEY=abc123"], &[]);
	assert!(!harness.session.hide_values());
	assert_eq!(harness.lines(), ["HOME=/root", "API_KEY=******"]);
}

#[test]
fn global_toggle_masks_everything_and_survives_mode_changes() {
	let mut harness = Harness::new(&SAMPLE, &["PORT=3000"]);
	harness.key(KeyCode::Tab);
	assert_eq!(harness.lines(), ["HOME=*****", "API_KEY=******", "PATH=****"]);

	harness.key(KeyCode::Char('d'));
	assert_eq!(harness.session.mode(), &Mode::Local);
	assert_eq!(harness.lines(), ["PORT=****"]);

	harness.key(KeyCode::Char('d'));
	harness.key(KeyCode::Char('s'));
	assert!(harness.session.hide_values());
}

#[test]
fn search_selection_survives_clearing_the_term() {
	let mut harness = Harness::new(&SAMPLE, &[]);
	harness.key(KeyCode::Char('s'));
	harness.type_text("key");
	assert_eq!(harness.lines(), ["API_KEY=******"]);

	harness.key(KeyCode::Enter);
	assert!(harness.session.primary().is_selected(1));

	for _ in 0..3 {
		harness.key(KeyCode::Backspace);
	}
	assert_eq!(harness.session.mode().term(), "");
	assert!(harness.session.primary().is_selected(1));

	harness.key(KeyCode::Esc);
	let frame = harness.session.frame(20);
	let checked: Vec<bool> = frame.body.lines().iter().map(|l| l.selected).collect();
	assert_eq!(checked, [false, true, false]);
}

#[test]
fn cancelling_search_discards_term_and_cursor() {
	let mut harness = Harness::new(&SAMPLE, &[]);
	harness.key(KeyCode::Char('j'));
	harness.key(KeyCode::Char('/'));
	harness.type_text("a");
	harness.key(KeyCode::Down);
	harness.key(KeyCode::Esc);
	assert_eq!(harness.session.mode(), &Mode::Normal);
	assert_eq!(harness.session.primary().cursor(), 1);

	harness.key(KeyCode::Char('s'));
	assert_eq!(harness.session.mode(), &Mode::Search(SearchState::default()));
}

#[test]
fn typing_and_backspace_reset_the_search_cursor() {
	let mut harness = Harness::new(&SAMPLE, &[]);
	harness.key(KeyCode::Char('s'));
	harness.key(KeyCode::Down);
	harness.key(KeyCode::Down);
	assert_eq!(harness.session.mode().search().map(|s| s.cursor), Some(2));

	harness.type_text("h");
	assert_eq!(harness.session.mode().search().map(|s| s.cursor), Some(0));

	harness.key(KeyCode::Down);
	harness.key(KeyCode::Backspace);
	assert_eq!(harness.session.mode().search().map(|s| s.cursor), Some(0));
}

#[test]
fn mask_toggle_keeps_the_search_cursor() {
	let mut harness = Harness::new(&SAMPLE, &[]);
	harness.key(KeyCode::Char('s'));
	harness.key(KeyCode::Down);
	harness.key(KeyCode::Tab);
	assert_eq!(harness.session.mode().search().map(|s| s.cursor), Some(1));
	assert!(harness.session.hide_values());
}

#[test]
fn search_cursor_stays_inside_results() {
	let mut harness = Harness::new(&SAMPLE, &[]);
	harness.key(KeyCode::Char('s'));
	harness.type_text("path");
	for _ in 0..4 {
		harness.key(KeyCode::Down);
	}
	assert_eq!(harness.session.mode().search().map(|s| s.cursor), Some(0));
	assert_eq!(harness.session.frame(20).footer.position, "<1-1>");
}

#[test]
fn empty_search_renders_no_results() {
	let mut harness = Harness::new(&SAMPLE, &[]);
	harness.key(KeyCode::Char('s'));
	harness.type_text("nope");
	let frame = harness.session.frame(20);
	assert_eq!(frame.body, Body::NoResults);
	assert_eq!(frame.footer.position, "<0-0>");

	harness.key(KeyCode::Enter);
	harness.ctrl('y');
	assert_eq!(harness.session.primary().selected_count(), 0);
	assert_eq!(harness.session.status(), Some(NOTHING_TO_COPY));
	assert!(harness.clipboard.writes.is_empty());
}

#[test]
fn local_view_is_rejected_without_local_variables() {
	let mut harness = Harness::new(&SAMPLE, &[]);
	harness.key(KeyCode::Char('d'));
	assert_eq!(harness.session.mode(), &Mode::Normal);
	assert_eq!(
		harness.session.status(),
		Some("No variables loaded from .env")
	);
}

#[test]
fn local_view_state_persists_across_toggles() {
	let mut harness = Harness::new(&SAMPLE, &["PORT=3000", "DEBUG=true"]);
	harness.key(KeyCode::Char('d'));
	harness.key(KeyCode::Char('j'));
	harness.key(KeyCode::Char(' '));
	harness.key(KeyCode::Esc);
	assert_eq!(harness.session.mode(), &Mode::Normal);

	harness.key(KeyCode::Char('d'));
	assert_eq!(harness.session.secondary().cursor(), 1);
	assert!(harness.session.secondary().is_selected(1));
	assert!(!harness.session.primary().is_selected(1));
}

#[test]
fn status_is_cleared_by_the_next_keystroke() {
	let mut harness = Harness::new(&SAMPLE, &[]);
	harness.key(KeyCode::Char('Y'));
	assert_eq!(harness.session.status(), Some(NOTHING_SELECTED));
	assert!(harness.clipboard.writes.is_empty());

	harness.key(KeyCode::F(5));
	assert_eq!(harness.session.status(), None);
}

#[test]
fn default_options_use_ascii_headers() {
	assert_eq!(SessionOptions::default().icons, IconStyle::Ascii);
	let session = Session::new(Vec::new(), Vec::new(), SessionOptions::default());
	assert_eq!(session.frame(5).header, "[ENV] Environment Variables:");
}

#[test]
fn initial_status_is_shown_until_first_key() {
	let session = Session::new(Vec::new(), Vec::new(), SessionOptions::default())
		.with_status(Some("No local .env found".into()));
	assert_eq!(
		session.frame(5).footer.status.as_deref(),
		Some("No local .env found")
	);
}

#[test]
fn copies_use_raw_values_from_the_active_list() {
	let mut harness = Harness::new(&SAMPLE, &["JWT_SECRET=local"]);
	harness.key(KeyCode::Tab);
	harness.key(KeyCode::Char('j'));
	harness.key(KeyCode::Char('y'));
	assert_eq!(harness.clipboard.writes, ["API_KEY=abc123"]);
	assert_eq!(
		harness.session.status(),
		Some("Copied API_KEY to clipboard")
	);

	harness.key(KeyCode::Char('d'));
	harness.key(KeyCode::Enter);
	harness.key(KeyCode::Char('Y'));
	assert_eq!(harness.clipboard.writes[1], "JWT_SECRET=local");
	assert_eq!(
		harness.session.status(),
		Some("Copied 1 variable to clipboard")
	);
}

#[test]
fn search_mode_copies_from_the_filtered_view() {
	let mut harness = Harness::new(&SAMPLE, &[]);
	harness.key(KeyCode::Char(' '));
	harness.key(KeyCode::Char('s'));
	harness.type_text("bin");
	harness.key(KeyCode::Enter);
	harness.ctrl('y');
	assert_eq!(harness.clipboard.writes, ["PATH=/bin"]);

	harness.ctrl('a');
	assert_eq!(harness.clipboard.writes[1], "HOME=/root\nPATH=/bin");
	assert_eq!(
		harness.session.status(),
		Some("Copied 2 variables to clipboard")
	);
}

#[test]
fn space_in_search_is_typed_not_selected() {
	let mut harness = Harness::new(&["GREETING=hello world", "HOME=/root"], &[]);
	harness.key(KeyCode::Char('s'));
	harness.type_text("o w");
	assert_eq!(harness.session.mode().term(), "o w");
	assert_eq!(harness.lines(), ["GREETING=hello world"]);
	assert_eq!(harness.session.primary().selected_count(), 0);
	assert!(harness.session.frame(20).footer.hints.contains("space types"));
}

#[test]
fn quit_is_available_everywhere() {
	let mut harness = Harness::new(&SAMPLE, &["A=1"]);
	assert_eq!(harness.key(KeyCode::Char('q')), Flow::Quit);

	harness.key(KeyCode::Char('d'));
	assert_eq!(harness.key(KeyCode::Char('q')), Flow::Quit);

	harness.key(KeyCode::Esc);
	harness.key(KeyCode::Char('s'));
	assert_eq!(harness.key(KeyCode::Char('q')), Flow::Continue);
	assert_eq!(harness.ctrl('c'), Flow::Quit);
}

#[test]
fn frame_windows_long_lists_around_the_cursor() {
	let raw: Vec<String> = (0..50).map(|i| format!("VAR_{i:02}=v")).collect();
	let mut session = Session::new(entries_from(raw), Vec::new(), SessionOptions::default());
	let mut clipboard = Recorder::default();
	for _ in 0..25 {
		session.apply(Action::Move(crate::list::Direction::Down), &mut clipboard);
	}

	let frame = session.frame(10);
	let lines = frame.body.lines();
	assert_eq!(lines.len(), 10);
	assert_eq!(lines[0].text, "VAR_20=v");
	assert!(lines[5].is_cursor);
	assert_eq!(frame.footer.position, "<26-50>");
}

#[test]
fn normal_frame_snapshot() {
	let mut harness = Harness::new(&["HOME=/root", "API_KEY=abc123"], &[]);
	harness.key(KeyCode::Char('j'));
	harness.key(KeyCode::Enter);
	insta::assert_snapshot!(harness.session.frame(10).to_string(), @r"
[ENV] Environment Variables:

  [ ] HOME=/root
> [x] API_KEY=******
<2-2>
[↑/↓] Navigate [↵] Select  [y/Y] Copy (one/all)  [tab] Toggle  [s] Search  [d] Local  [q] Quit
");
}

#[test]
fn search_frame_snapshot() {
	let mut harness = Harness::new(&SAMPLE, &[]);
	harness.key(KeyCode::Char('s'));
	harness.type_text("o");
	harness.key(KeyCode::Tab);
	insta::assert_snapshot!(harness.session.frame(10).to_string(), @r"
[S] Search Results:

> [ ] HOME=*****
<1-1>
Search mode: o
[↑/↓] Navigate [↵] Select (space types) [ctrl+y/ctrl+a] Copy (one/all) [tab] Toggle [esc] Back
");
}
