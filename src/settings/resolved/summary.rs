use std::fmt::Write;

use envlens::app_dirs;
use envlens::logging::LOG_FILE_NAME;

use super::ResolvedConfig;

pub(super) fn render_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Env file: {}", config.env_file.display());
	let _ = writeln!(out, "  Hide values: {}", bool_to_word(config.hide_values));
	let _ = writeln!(out, "  Mask character: {}", config.mask_char);
	let _ = writeln!(out, "  Icons: {}", config.icons.id());
	if config.sensitive_patterns.is_empty() {
		let _ = writeln!(out, "  Sensitive patterns: (none)");
	} else {
		let _ = writeln!(
			out,
			"  Sensitive patterns: {}",
			config.sensitive_patterns.join(", ")
		);
	}
	let _ = writeln!(out, "  OSC 52 fallback: {}", bool_to_word(config.osc52));
	match &config.log_filter {
		Some(filter) => {
			let _ = writeln!(out, "  Log filter: {filter}");
			if let Ok(dir) = app_dirs::get_data_dir() {
				let _ = writeln!(out, "  Log file: {}", dir.join(LOG_FILE_NAME).display());
			}
		}
		None => {
			let _ = writeln!(out, "  Log filter: (disabled)");
		}
	}
	out
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::super::IconChoice;
	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(super::bool_to_word(true), "yes");
		assert_eq!(super::bool_to_word(false), "no");
	}

	#[test]
	fn summary_lists_every_setting() {
		let config = ResolvedConfig {
			env_file: PathBuf::from(".env"),
			hide_values: true,
			mask_char: '#',
			icons: IconChoice::Ascii,
			sensitive_patterns: vec!["key".into(), "token".into()],
			osc52: false,
			log_filter: None,
		};

		insta::assert_snapshot!(render_summary(&config), @r"
Effective configuration:
  Env file: .env
  Hide values: yes
  Mask character: #
  Icons: ascii
  Sensitive patterns: key, token
  OSC 52 fallback: no
  Log filter: (disabled)
");
	}
}
