use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) env_file: Option<SettingSource>,
	pub(crate) mask_char: Option<SettingSource>,
	pub(crate) icons: Option<SettingSource>,
	pub(crate) log_filter: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_env_file(&self) -> SettingSource {
		self.env_file
			.clone()
			.unwrap_or(SettingSource::ConfigKey("env_file"))
	}

	pub(crate) fn source_for_mask_char(&self) -> SettingSource {
		self.mask_char
			.clone()
			.unwrap_or(SettingSource::ConfigKey("display.mask_char"))
	}

	pub(crate) fn source_for_icons(&self) -> SettingSource {
		self.icons
			.clone()
			.unwrap_or(SettingSource::ConfigKey("display.icons"))
	}

	pub(crate) fn source_for_log_filter(&self) -> SettingSource {
		self.log_filter
			.clone()
			.unwrap_or(SettingSource::ConfigKey("log.filter"))
	}
}
