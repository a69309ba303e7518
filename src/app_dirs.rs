//! Where envlens keeps its files.
//!
//! `config.toml` lives in the config directory and `envlens.log` in the data
//! directory. `ENVLENS_CONFIG_DIR` / `ENVLENS_DATA_DIR` relocate them, which
//! tests and portable installs rely on.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const CONFIG_DIR_ENV: &str = "ENVLENS_CONFIG_DIR";
const DATA_DIR_ENV: &str = "ENVLENS_DATA_DIR";

#[derive(Clone, Copy)]
enum Kind {
	Config,
	Data,
}

impl Kind {
	fn override_var(self) -> &'static str {
		match self {
			Kind::Config => CONFIG_DIR_ENV,
			Kind::Data => DATA_DIR_ENV,
		}
	}

	fn platform_dir(self, dirs: &ProjectDirs) -> PathBuf {
		match self {
			Kind::Config => dirs.config_local_dir().to_path_buf(),
			Kind::Data => dirs.data_local_dir().to_path_buf(),
		}
	}
}

/// Non-empty override, else the platform location.
fn resolve(kind: Kind) -> Result<PathBuf> {
	if let Some(dir) = env::var_os(kind.override_var()).filter(|value| !value.is_empty()) {
		return Ok(PathBuf::from(dir));
	}

	let dirs = ProjectDirs::from("io", "envlens", "envlens")
		.ok_or_else(|| anyhow!("no home directory to place envlens files in"))?;
	Ok(kind.platform_dir(&dirs))
}

pub fn get_config_dir() -> Result<PathBuf> {
	resolve(Kind::Config)
}

/// Directory receiving `envlens.log`.
pub fn get_data_dir() -> Result<PathBuf> {
	resolve(Kind::Data)
}
