//! Loading of the two variable lists shown by the viewer.
//!
//! Failing to read the local file is never fatal: the caller gets an empty
//! secondary list and a notice to show the user.

mod demo;

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::list::{Entry, entries_from};

pub use demo::{DEMO_ENV, DEMO_LOCAL};

/// Why the local file could not be used.
#[derive(Debug, Error)]
pub enum LoadError {
	#[error("no local {name} found")]
	Missing { name: String },
	#[error("failed to read {name}: {source}")]
	Unreadable {
		name: String,
		#[source]
		source: dotenvy::Error,
	},
}

/// Both lists plus an optional informational notice.
#[derive(Debug, Default)]
pub struct Sources {
	pub primary: Vec<Entry>,
	pub secondary: Vec<Entry>,
	pub notice: Option<String>,
}

impl Sources {
	/// The built-in demonstration data.
	#[must_use]
	pub fn demo() -> Self {
		Self {
			primary: entries_from(DEMO_ENV),
			secondary: entries_from(DEMO_LOCAL),
			notice: Some("Demo mode: showing sample data".to_string()),
		}
	}

	/// The live process environment and the variables in `env_file`.
	#[must_use]
	pub fn load(env_file: &Path) -> Self {
		let primary = process_environment();
		let (secondary, notice) = match read_env_file(env_file) {
			Ok(entries) => {
				tracing::info!(
					path = %env_file.display(),
					count = entries.len(),
					"loaded local variables"
				);
				(entries, None)
			}
			Err(err) => {
				tracing::info!(path = %env_file.display(), error = %err, "local variables unavailable");
				(Vec::new(), Some(capitalize(&err.to_string())))
			}
		};
		tracing::info!(count = primary.len(), "loaded process environment");

		Self {
			primary,
			secondary,
			notice,
		}
	}
}

/// The process environment as `KEY=VALUE` entries, in platform order.
#[must_use]
pub fn process_environment() -> Vec<Entry> {
	std::env::vars_os()
		.map(|(key, value)| Entry::from_pair(&key.to_string_lossy(), &value.to_string_lossy()))
		.collect()
}

/// Parse a dotenv-style file without touching the process environment.
///
/// Entries keep the order in which they appear in the file.
pub fn read_env_file(path: &Path) -> Result<Vec<Entry>, LoadError> {
	let name = path
		.file_name()
		.map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());

	let iter = dotenvy::from_path_iter(path).map_err(|source| {
		if matches!(&source, dotenvy::Error::Io(err) if err.kind() == io::ErrorKind::NotFound) {
			LoadError::Missing { name: name.clone() }
		} else {
			LoadError::Unreadable {
				name: name.clone(),
				source,
			}
		}
	})?;

	iter.map(|item| {
		item.map(|(key, value)| Entry::from_pair(&key, &value))
			.map_err(|source| LoadError::Unreadable {
				name: name.clone(),
				source,
			})
	})
	.collect()
}

fn capitalize(message: &str) -> String {
	let mut chars = message.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
