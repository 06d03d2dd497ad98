use std::path::PathBuf;

use jobsearch::app_dirs;
use jobsearch::logging::DEFAULT_LEVEL;
use serde::Deserialize;

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LoggingValues {
	pub(crate) level: String,
	pub(crate) file: PathBuf,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = &cli.log_level {
			self.level = Some(level.clone());
		}
		if let Some(file) = &cli.log_file {
			self.file = Some(file.clone());
		}
	}

	pub(super) fn finalize(self) -> LoggingValues {
		LoggingValues {
			level: self.level.unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
			file: self.file.unwrap_or_else(default_log_file),
		}
	}
}

fn default_log_file() -> PathBuf {
	app_dirs::default_log_file().unwrap_or_else(|_| PathBuf::from(app_dirs::LOG_FILE_NAME))
}
