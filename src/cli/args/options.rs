use clap::ValueEnum;

/// Theme modes accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ThemeArg {
	Light,
	Dark,
}

impl ThemeArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			ThemeArg::Light => "light",
			ThemeArg::Dark => "dark",
		}
	}
}

/// Output formats for batch mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
