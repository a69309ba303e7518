use anyhow::{Error, Result};
use serde::Deserialize;

use envlens::list::DEFAULT_MASK_CHAR;

use super::super::resolved::{ConfigSources, IconChoice, parse_icons, parse_mask_char};
use crate::cli::CliArgs;

/// Display related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DisplaySection {
	pub(super) hide_values: Option<bool>,
	pub(super) mask_char: Option<String>,
	pub(super) icons: Option<String>,
}

pub(super) struct DisplayResolution {
	pub(super) hide_values: bool,
	pub(super) mask_char: char,
	pub(super) icons: IconChoice,
}

impl DisplaySection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(hide) = cli.hide_values {
			self.hide_values = Some(hide);
		}
		if let Some(mask_char) = cli.mask_char.clone() {
			self.mask_char = Some(mask_char);
		}
		if let Some(icons) = cli.icons {
			self.icons = Some(icons.as_str().to_string());
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<DisplayResolution> {
		let mask_char = match self.mask_char {
			Some(value) => {
				parse_mask_char(&value, sources.source_for_mask_char()).map_err(Error::new)?
			}
			None => DEFAULT_MASK_CHAR,
		};
		let icons = match self.icons {
			Some(value) => {
				parse_icons(&value, sources.source_for_icons()).map_err(Error::new)?
			}
			None => IconChoice::Auto,
		};

		Ok(DisplayResolution {
			hide_values: self.hide_values.unwrap_or(false),
			mask_char,
			icons,
		})
	}
}
