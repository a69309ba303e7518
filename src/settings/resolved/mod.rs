use std::path::PathBuf;

use envlens::list::SensitivityRule;
use envlens::session::{IconStyle, SessionOptions};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};
pub(crate) use validation::{parse_icons, parse_mask_char};

use super::util::file_label;

/// How header icons are chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconChoice {
	/// Emoji on terminals known to render them, ASCII otherwise.
	#[default]
	Auto,
	Emoji,
	Ascii,
}

impl IconChoice {
	pub(crate) fn id(self) -> &'static str {
		match self {
			IconChoice::Auto => "auto",
			IconChoice::Emoji => "emoji",
			IconChoice::Ascii => "ascii",
		}
	}

	#[must_use]
	pub fn style(self) -> IconStyle {
		match self {
			IconChoice::Auto => IconStyle::detect(),
			IconChoice::Emoji => IconStyle::Emoji,
			IconChoice::Ascii => IconStyle::Ascii,
		}
	}
}

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub env_file: PathBuf,
	pub hide_values: bool,
	pub mask_char: char,
	pub icons: IconChoice,
	pub sensitive_patterns: Vec<String>,
	pub osc52: bool,
	pub log_filter: Option<String>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Name of the local file as shown to the user.
	#[must_use]
	pub fn local_label(&self) -> String {
		file_label(&self.env_file)
	}

	/// Display settings for a new session.
	#[must_use]
	pub fn session_options(&self) -> SessionOptions {
		SessionOptions {
			hide_values: self.hide_values,
			mask_char: self.mask_char,
			icons: self.icons.style(),
			sensitivity: SensitivityRule::new(&self.sensitive_patterns),
			local_label: self.local_label(),
		}
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::render_summary(self));
	}
}
