use std::env;
use std::path::PathBuf;

use anyhow::{Error, Result};
use serde::Deserialize;

use envlens::list::DEFAULT_SENSITIVE_PATTERNS;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use super::util::{non_blank, sanitize_patterns};

mod display;

use display::DisplaySection;

const DEFAULT_ENV_FILE: &str = ".env";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	env_file: Option<PathBuf>,
	display: DisplaySection,
	sensitivity: SensitivitySection,
	clipboard: ClipboardSection,
	log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SensitivitySection {
	patterns: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ClipboardSection {
	osc52: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LogSection {
	filter: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.env_file.clone() {
			self.env_file = Some(path);
		}
		self.display.apply_cli_overrides(cli);
		if let Some(patterns) = cli.sensitive.clone() {
			self.sensitivity.patterns = Some(patterns);
		}
		if let Some(osc52) = cli.osc52 {
			self.clipboard.osc52 = Some(osc52);
		}
		if let Some(filter) = cli.log_filter.clone() {
			self.log.filter = Some(filter);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			env_file: detect_source(
				cli.env_file.is_some(),
				self.env_file.is_some(),
				"ENVLENS__ENV_FILE",
				"--env-file",
				"env_file",
			),
			mask_char: detect_source(
				cli.mask_char.is_some(),
				self.display.mask_char.is_some(),
				"ENVLENS__DISPLAY__MASK_CHAR",
				"--mask-char",
				"display.mask_char",
			),
			icons: detect_source(
				cli.icons.is_some(),
				self.display.icons.is_some(),
				"ENVLENS__DISPLAY__ICONS",
				"--icons",
				"display.icons",
			),
			log_filter: detect_source(
				cli.log_filter.is_some(),
				self.log.filter.is_some(),
				"ENVLENS__LOG__FILTER",
				"--log-filter",
				"log.filter",
			),
		};

		let display = self.display.resolve(&sources)?;
		let sensitive_patterns = match self.sensitivity.patterns {
			Some(patterns) => sanitize_patterns(patterns),
			None => DEFAULT_SENSITIVE_PATTERNS.map(String::from).to_vec(),
		};

		let config = ResolvedConfig {
			env_file: self
				.env_file
				.unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE)),
			hide_values: display.hide_values,
			mask_char: display.mask_char,
			icons: display.icons,
			sensitive_patterns,
			osc52: self.clipboard.osc52.unwrap_or(true),
			log_filter: non_blank(self.log.filter),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
