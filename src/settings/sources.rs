use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, Environment, File};

use crate::cli::CliArgs;
use envlens::app_dirs;

/// Project-local file names, checked in this order after the user config.
const LOCAL_FILE_NAMES: [&str; 2] = [".envlens.toml", "envlens.toml"];

/// Layer optional default files, required `--config` files and `ENVLENS__*`
/// variables; later layers win.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};

	let files = defaults
		.into_iter()
		.map(|path| File::from(path).required(false))
		.chain(
			cli.config
				.iter()
				.map(|path| File::from(path.clone()).required(true)),
		);

	files
		.fold(Config::builder(), |builder, file| builder.add_source(file))
		.add_source(environment())
		.build()
		.map_err(|err| anyhow!("failed to read configuration: {err}"))
}

/// `ENVLENS__DISPLAY__MASK_CHAR=#` style overrides. Only the pattern list is
/// split on commas.
fn environment() -> Environment {
	Environment::with_prefix("envlens")
		.separator("__")
		.try_parsing(true)
		.list_separator(",")
		.with_list_parse_key("sensitivity.patterns")
}

/// The user config file followed by the project-local ones.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let user = app_dirs::get_config_dir()
		.ok()
		.map(|dir| dir.join("config.toml"));
	let local = env::current_dir()
		.ok()
		.into_iter()
		.flat_map(|dir| LOCAL_FILE_NAMES.map(|name| dir.join(name)));

	user.into_iter().chain(local).collect()
}
