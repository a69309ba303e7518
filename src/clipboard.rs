//! Clipboard transmission.
//!
//! The session only needs something that accepts a string; the system
//! implementation pipes into the first native clipboard tool that works and
//! can fall back to an OSC 52 escape sequence written to the terminal.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use base64::Engine;
use thiserror::Error;

/// Failure to hand text to the clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
	#[error("no clipboard tool available")]
	Unavailable,
	#[error("{tool} exited with {status}")]
	ToolFailed {
		tool: &'static str,
		status: std::process::ExitStatus,
	},
	#[error(transparent)]
	Io(#[from] io::Error),
}

/// Sink for exported entries.
pub trait Clipboard {
	fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Native tools tried in order. Each entry is `(program, args, env guard)`.
const NATIVE_TOOLS: &[(&str, &[&str], Option<&str>)] = &[
	("wl-copy", &[], Some("WAYLAND_DISPLAY")),
	("xclip", &["-selection", "clipboard"], None),
	("xsel", &["--clipboard", "--input"], None),
	("pbcopy", &[], None),
	("clip.exe", &[], None),
];

/// Clipboard backed by the host system.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
	osc52: bool,
}

impl Default for SystemClipboard {
	fn default() -> Self {
		Self { osc52: true }
	}
}

impl SystemClipboard {
	/// Build a clipboard, optionally allowing the OSC 52 fallback.
	#[must_use]
	pub fn new(osc52: bool) -> Self {
		Self { osc52 }
	}
}

impl Clipboard for SystemClipboard {
	fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
		let mut last_failure = None;
		for &(tool, args, guard) in NATIVE_TOOLS {
			if guard.is_some_and(|var| std::env::var_os(var).is_none()) {
				continue;
			}
			match pipe_to(tool, args, text) {
				Ok(()) => {
					tracing::debug!(tool, "copied via native clipboard tool");
					return Ok(());
				}
				Err(ClipboardError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {}
				Err(err) => {
					tracing::debug!(tool, error = %err, "clipboard tool failed");
					last_failure = Some(err);
				}
			}
		}

		if self.osc52 {
			write_osc52(&mut io::stdout().lock(), text)?;
			tracing::debug!("copied via OSC 52");
			return Ok(());
		}

		Err(last_failure.unwrap_or(ClipboardError::Unavailable))
	}
}

fn pipe_to(tool: &'static str, args: &[&str], text: &str) -> Result<(), ClipboardError> {
	let mut child = Command::new(tool)
		.args(args)
		.stdin(Stdio::piped())
		.stdout(Stdio::null())
		.stderr(Stdio::null())
		.spawn()?;

	// stdin must be closed before waiting, and the child reaped even when
	// the write fails.
	let written = match child.stdin.take() {
		Some(mut stdin) => stdin.write_all(text.as_bytes()),
		None => Ok(()),
	};
	let status = child.wait()?;
	written?;

	if status.success() {
		Ok(())
	} else {
		Err(ClipboardError::ToolFailed { tool, status })
	}
}

/// Build the OSC 52 sequence for `text`, wrapped for tmux when needed.
fn osc52_sequence(text: &str, in_tmux: bool) -> String {
	let encoded = base64::engine::general_purpose::STANDARD.encode(text);
	if in_tmux {
		format!("\x1bPtmux;\x1b\x1b]52;c;{encoded}\x07\x1b\\")
	} else {
		format!("\x1b]52;c;{encoded}\x07")
	}
}

fn write_osc52(out: &mut impl Write, text: &str) -> io::Result<()> {
	let in_tmux = std::env::var_os("TMUX").is_some();
	out.write_all(osc52_sequence(text, in_tmux).as_bytes())?;
	out.flush()
}
