mod cli;
mod settings;

use anyhow::{Context, Result};
use cli::parse_cli;
use envlens::{Session, Sources, SystemClipboard, Theme, app_dirs, logging};
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let log_guard = match resolved.log_filter.as_deref() {
		Some(filter) => {
			let dir = app_dirs::get_data_dir()?;
			logging::initialize(Some(filter), &dir)?
		}
		None => None,
	};
	if let Some(guard) = &log_guard {
		tracing::debug!(path = %guard.path().display(), "log file opened");
	}

	run_viewer(cli.demo, &resolved)
}

/// Load both lists and hand them to the interactive session.
fn run_viewer(demo: bool, settings: &ResolvedConfig) -> Result<()> {
	let sources = if demo {
		tracing::info!("using demonstration data");
		Sources::demo()
	} else {
		Sources::load(&settings.env_file)
	};

	let Sources {
		primary,
		secondary,
		notice,
	} = sources;
	let mut session =
		Session::new(primary, secondary, settings.session_options()).with_status(notice);
	let mut clipboard = SystemClipboard::new(settings.osc52);

	envlens::run(&mut session, &mut clipboard, &Theme::detect())
		.context("viewer exited with an error")
}
