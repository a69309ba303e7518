use std::io;

use anyhow::{Context, Result};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::{Theme, render};
use crate::clipboard::Clipboard;
use crate::session::{Flow, Session};

/// Take over the terminal and run the session until the user quits.
///
/// The terminal is restored on every exit path once initialization succeeded.
pub fn run(session: &mut Session, clipboard: &mut dyn Clipboard, theme: &Theme) -> Result<()> {
	let mut terminal = ratatui::try_init().context("failed to initialize terminal")?;
	tracing::debug!("terminal initialized");

	let result = event_loop(&mut terminal, session, clipboard, theme, event::read);

	ratatui::restore();
	tracing::debug!("terminal restored");
	result
}

/// Draw, wait for one event, repeat. Input is read on this thread only.
fn event_loop<B, F>(
	terminal: &mut Terminal<B>,
	session: &mut Session,
	clipboard: &mut dyn Clipboard,
	theme: &Theme,
	mut next_event: F,
) -> Result<()>
where
	B: Backend,
	F: FnMut() -> io::Result<Event>,
{
	terminal.clear()?;

	loop {
		terminal.draw(|frame| render::draw(frame, session, theme))?;

		match next_event().context("failed to read terminal event")? {
			Event::Key(key) if key.kind == KeyEventKind::Press => {
				if session.handle_key(key, clipboard) == Flow::Quit {
					tracing::debug!("quit requested");
					return Ok(());
				}
			}
			Event::Resize(width, height) => tracing::trace!(width, height, "resize"),
			_ => {}
		}
	}
}
