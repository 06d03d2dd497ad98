use std::path::PathBuf;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects, Style};
use jobsearch::app_dirs;

/// `--version` output: the package version followed by the directories the
/// binary reads settings from and writes its log to.
pub(super) fn long_version() -> &'static str {
	let banner = version_banner(&[
		("config directory", app_dirs::get_config_dir()),
		("data directory", app_dirs::get_data_dir()),
	]);
	Box::leak(banner.into_boxed_str())
}

fn version_banner(dirs: &[(&str, Result<PathBuf>)]) -> String {
	let mut lines = vec![format!("jobsearch {}", env!("CARGO_PKG_VERSION")), String::new()];
	lines.extend(dirs.iter().map(|(label, dir)| match dir {
		Ok(path) => format!("{label}: {}", path.display()),
		Err(err) => format!("{label}: unavailable ({err})"),
	}));
	lines.join("\n")
}

/// Help colours, matched to the accent of the TUI's card titles.
pub(super) fn cli_styles() -> Styles {
	let heading: Style = AnsiColor::Blue.on_default().effects(Effects::BOLD | Effects::UNDERLINE);
	Styles::styled()
		.header(heading)
		.usage(heading)
		.literal(AnsiColor::Magenta.on_default().effects(Effects::BOLD))
		.placeholder(AnsiColor::BrightBlack.on_default())
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
}
