use tracing_subscriber::EnvFilter;

use super::{ConfigError, ConfigSources, IconChoice, ResolvedConfig, SettingSource};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.env_file.as_os_str().is_empty() {
		return Err(ConfigError::invalid(
			"env_file",
			"",
			sources.source_for_env_file(),
			"must not be empty",
		));
	}

	if let Some(filter) = &config.log_filter
		&& let Err(err) = EnvFilter::try_new(filter)
	{
		return Err(ConfigError::invalid(
			"log.filter",
			filter.as_str(),
			sources.source_for_log_filter(),
			format!("not a valid tracing filter ({err})"),
		));
	}

	Ok(())
}

/// Accept exactly one visible character other than `=`.
pub(crate) fn parse_mask_char(value: &str, origin: SettingSource) -> Result<char, ConfigError> {
	let mut chars = value.chars();
	let (Some(ch), None) = (chars.next(), chars.next()) else {
		return Err(ConfigError::invalid(
			"display.mask_char",
			value,
			origin,
			"must be exactly one character",
		));
	};

	if ch.is_whitespace() || ch.is_control() {
		return Err(ConfigError::invalid(
			"display.mask_char",
			value,
			origin,
			"must be a visible character",
		));
	}
	if ch == '=' {
		return Err(ConfigError::invalid(
			"display.mask_char",
			value,
			origin,
			"must not be `=`",
		));
	}

	Ok(ch)
}

pub(crate) fn parse_icons(value: &str, origin: SettingSource) -> Result<IconChoice, ConfigError> {
	match value.trim().to_ascii_lowercase().as_str() {
		"auto" => Ok(IconChoice::Auto),
		"emoji" => Ok(IconChoice::Emoji),
		"ascii" => Ok(IconChoice::Ascii),
		_ => Err(ConfigError::invalid(
			"display.icons",
			value,
			origin,
			"expected one of auto, emoji, ascii",
		)),
	}
}
