use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser, ValueEnum};

use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `envlens` binary.
#[derive(Parser, Debug)]
#[command(
	name = "envlens",
	version,
	long_version = long_version(),
	about = "Browse, mask and copy environment variables",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		long,
		help = "Show built-in sample data instead of the real environment (default: disabled)"
	)]
	pub(crate) demo: bool,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "ENVLENS_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'f',
		long = "env-file",
		value_name = "PATH",
		help = "Local variables file shown in the local view (default: .env)"
	)]
	pub(crate) env_file: Option<PathBuf>,
	#[arg(
		short = 'H',
		long = "hide-values",
		value_parser = BoolishValueParser::new(),
		num_args = 0..=1,
		default_missing_value = "true",
		help = "Start with every value masked (default: disabled)"
	)]
	pub(crate) hide_values: Option<bool>,
	#[arg(
		short = 'm',
		long = "mask-char",
		value_name = "CHAR",
		help = "Character drawn in place of hidden values (default: *)"
	)]
	pub(crate) mask_char: Option<String>,
	#[arg(
		short = 'i',
		long,
		value_enum,
		help = "Header icon style (default: auto)"
	)]
	pub(crate) icons: Option<IconsArg>,
	#[arg(
		short = 's',
		long = "sensitive",
		value_delimiter = ',',
		value_name = "PATTERN",
		help = "Comma-separated key substrings that are always masked (default: key,secret,private)"
	)]
	pub(crate) sensitive: Option<Vec<String>>,
	#[arg(
		long,
		value_parser = BoolishValueParser::new(),
		help = "Fall back to OSC 52 when no clipboard tool is installed (default: enabled)"
	)]
	pub(crate) osc52: Option<bool>,
	#[arg(
		long = "log-filter",
		value_name = "DIRECTIVE",
		env = "ENVLENS_LOG",
		help = "Write logs matching this tracing filter to the data directory (default: off)"
	)]
	pub(crate) log_filter: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
}

/// Header icon styles accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum IconsArg {
	Auto,
	Emoji,
	Ascii,
}

impl IconsArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			IconsArg::Auto => "auto",
			IconsArg::Emoji => "emoji",
			IconsArg::Ascii => "ascii",
		}
	}
}
