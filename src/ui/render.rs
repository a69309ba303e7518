use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::Theme;
use crate::session::{Body, DisplayLine, NO_RESULTS, Session};

/// Gap between the position counter and the right edge.
const FOOTER_RIGHT_PADDING: u16 = 5;
const SEARCH_BOX_HEIGHT: u16 = 3;
const PROMPT_CURSOR: &str = "█";

/// Draw the session into the terminal frame.
pub fn draw(frame: &mut Frame, session: &Session, theme: &Theme) {
	let area = frame.area().inner(Margin {
		vertical: 0,
		horizontal: 1,
	});

	let searching = session.mode().search().is_some();
	let layout = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Length(2),
			Constraint::Min(1),
			Constraint::Length(1),
			Constraint::Length(if searching { SEARCH_BOX_HEIGHT } else { 0 }),
			Constraint::Length(1),
			Constraint::Length(1),
		])
		.split(area);

	let view = session.frame(usize::from(layout[1].height));

	frame.render_widget(
		Paragraph::new(Span::styled(view.header.as_str(), theme.header)),
		layout[0],
	);
	render_body(frame, layout[1], &view.body, theme);
	render_position(frame, layout[2], &view.footer.position, theme);
	if let Some(search) = &view.footer.search {
		render_search_box(frame, layout[3], search, theme);
	}
	frame.render_widget(
		Paragraph::new(Span::styled(view.footer.hints, theme.hint)),
		layout[4],
	);
	if let Some(status) = &view.footer.status {
		frame.render_widget(
			Paragraph::new(Span::styled(status.as_str(), theme.status)),
			layout[5],
		);
	}
}

fn render_body(frame: &mut Frame, area: Rect, body: &Body, theme: &Theme) {
	match body {
		Body::NoResults => {
			frame.render_widget(
				Paragraph::new(Span::styled(NO_RESULTS, theme.empty)),
				area,
			);
		}
		Body::Lines(lines) => {
			let lines: Vec<Line> = lines.iter().map(|line| styled_line(line, theme)).collect();
			frame.render_widget(Paragraph::new(lines), area);
		}
	}
}

fn styled_line<'a>(line: &'a DisplayLine, theme: &Theme) -> Line<'a> {
	if line.is_cursor {
		return Line::styled(line.to_string(), theme.cursor);
	}

	let check = String::from(line.check());
	let check = if line.selected {
		Span::styled(check, theme.check)
	} else {
		Span::raw(check)
	};
	Line::from(vec![
		Span::raw(format!("{} [", line.symbol())),
		check,
		Span::raw("] "),
		Span::raw(line.text.as_str()),
	])
}

fn render_position(frame: &mut Frame, area: Rect, position: &str, theme: &Theme) {
	let width = (position.width() as u16).min(area.width);
	let x = area
		.right()
		.saturating_sub(width.saturating_add(FOOTER_RIGHT_PADDING))
		.max(area.x);
	let target = Rect {
		x,
		y: area.y,
		width,
		height: area.height,
	};
	frame.render_widget(Paragraph::new(Span::styled(position, theme.hint)), target);
}

fn render_search_box(frame: &mut Frame, area: Rect, prompt: &str, theme: &Theme) {
	let block = Block::bordered()
		.border_style(theme.prompt_border)
		.padding(Padding::horizontal(1));
	let content = Line::from(vec![
		Span::raw(prompt),
		Span::styled(PROMPT_CURSOR, theme.prompt_cursor),
	]);
	frame.render_widget(Paragraph::new(content).block(block), area);
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;
	use ratatui::buffer::Buffer;
	use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

	use super::*;
	use crate::clipboard::{Clipboard, ClipboardError};
	use crate::list::entries_from;
	use crate::session::SessionOptions;

	struct NoClipboard;

	impl Clipboard for NoClipboard {
		fn write(&mut self, _text: &str) -> Result<(), ClipboardError> {
			Err(ClipboardError::Unavailable)
		}
	}

	fn buffer_to_string(buf: &Buffer) -> String {
		let mut lines = Vec::new();
		for y in 0..buf.area.height {
			let mut line = String::new();
			for x in 0..buf.area.width {
				line.push_str(buf[(x, y)].symbol());
			}
			lines.push(line.trim_end().to_string());
		}
		lines.join("\n")
	}

	fn session() -> Session {
		Session::new(
			entries_from(["HOME=/root", "API_KEY=abc123", "PATH=/bin"]),
			Vec::new(),
			SessionOptions::default(),
		)
	}

	fn render(session: &Session, width: u16, height: u16) -> String {
		let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
		terminal
			.draw(|frame| draw(frame, session, &Theme::default()))
			.unwrap();
		buffer_to_string(terminal.backend().buffer())
	}

	#[test]
	fn normal_mode_draws_header_rows_and_footer() {
		let screen = render(&session(), 100, 10);
		let lines: Vec<&str> = screen.lines().collect();
		assert_eq!(lines[0], " [ENV] Environment Variables:");
		assert_eq!(lines[2], " > [ ] HOME=/root");
		assert_eq!(lines[3], "   [ ] API_KEY=******");
		assert!(lines[7].trim_end().ends_with("<1-3>"));
		assert!(lines[8].contains("[s] Search"));
	}

	#[test]
	fn search_mode_draws_prompt_box() {
		let mut session = session();
		let mut clipboard = NoClipboard;
		for code in [KeyCode::Char('s'), KeyCode::Char('p'), KeyCode::Char('a')] {
			session.handle_key(KeyEvent::new(code, KeyModifiers::NONE), &mut clipboard);
		}

		let screen = render(&session, 100, 14);
		assert!(screen.contains("[S] Search Results:"));
		assert!(screen.contains("> [ ] PATH=/bin"));
		assert!(screen.contains("Search mode: pa█"));
		assert!(!screen.contains("HOME=/root"));
	}

	#[test]
	fn empty_search_draws_no_results_message() {
		let mut session = session();
		let mut clipboard = NoClipboard;
		for code in [KeyCode::Char('s'), KeyCode::Char('#')] {
			session.handle_key(KeyEvent::new(code, KeyModifiers::NONE), &mut clipboard);
		}

		let screen = render(&session, 100, 14);
		assert!(screen.contains(NO_RESULTS));
		assert!(screen.contains("<0-0>"));
	}

	#[test]
	fn tiny_terminal_does_not_panic() {
		let screen = render(&session(), 4, 3);
		assert_eq!(screen.lines().count(), 3);
	}
}
