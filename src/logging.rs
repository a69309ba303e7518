//! File-backed `tracing` setup.
//!
//! The interactive UI owns the terminal, so log records go to
//! `envlens.log` in the data directory. Nothing is installed unless a filter
//! directive is configured.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "envlens.log";

/// Keeps the background writer alive; dropping it flushes pending records.
#[must_use = "dropping the guard stops the log writer"]
pub struct LogGuard {
	_guard: WorkerGuard,
	path: PathBuf,
}

impl LogGuard {
	#[must_use]
	pub fn path(&self) -> &Path {
		&self.path
	}
}

/// Install the global subscriber when `filter` is set.
pub fn initialize(filter: Option<&str>, dir: &Path) -> Result<Option<LogGuard>> {
	let Some(filter) = filter else {
		return Ok(None);
	};

	let filter = EnvFilter::try_new(filter)
		.with_context(|| format!("invalid log filter `{filter}`"))?;
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;

	let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
	let (writer, guard) = tracing_appender::non_blocking(appender);

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(writer)
		.with_ansi(false)
		.with_target(false)
		.try_init()
		.map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))?;

	let path = dir.join(LOG_FILE_NAME);
	tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");

	Ok(Some(LogGuard {
		_guard: guard,
		path,
	}))
}
