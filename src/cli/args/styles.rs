use std::path::PathBuf;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use envlens::app_dirs;
use envlens::logging::LOG_FILE_NAME;

/// `--version` text: the version plus where config is read and logs go.
pub(super) fn long_version() -> &'static str {
	let details = format!(
		"{}\nconfig file: {}\nlog file: {}",
		env!("CARGO_PKG_VERSION"),
		describe(app_dirs::get_config_dir().map(|dir| dir.join("config.toml"))),
		describe(app_dirs::get_data_dir().map(|dir| dir.join(LOG_FILE_NAME))),
	);
	Box::leak(details.into_boxed_str())
}

fn describe(path: Result<PathBuf>) -> String {
	match path {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	}
}

/// Help colours.
pub(super) fn cli_styles() -> Styles {
	let heading = AnsiColor::Magenta.on_default().effects(Effects::BOLD);
	Styles::styled()
		.header(heading)
		.usage(heading)
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
}

#[cfg(test)]
mod tests {
	use anyhow::anyhow;

	use super::*;

	#[test]
	fn long_version_lists_config_and_log_locations() {
		let text = long_version();
		let mut lines = text.lines();
		assert_eq!(lines.next(), Some(env!("CARGO_PKG_VERSION")));
		assert!(lines.next().is_some_and(|line| line.starts_with("config file: ")));
		assert!(lines.next().is_some_and(|line| line.starts_with("log file: ")));
	}

	#[test]
	fn unresolvable_location_is_described() {
		assert_eq!(describe(Err(anyhow!("no home"))), "unavailable (no home)");
		assert_eq!(describe(Ok(PathBuf::from("/tmp/x"))), "/tmp/x");
	}
}
