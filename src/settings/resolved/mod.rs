use std::time::Duration;

use jobsearch::logging::LoggingSettings;
use jobsearch::search::ApiKey;
use jobsearch::tui::ThemeMode;

use super::raw::{ApiValues, LoggingValues, UiValues};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Connection settings for the search API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
	pub key: ApiKey,
	pub endpoint: String,
	pub timeout: Option<Duration>,
}

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
	pub api: ApiSettings,
	pub theme: ThemeMode,
	pub job_title: String,
	pub location: String,
	pub logging: LoggingSettings,
}

impl ResolvedConfig {
	pub(super) fn validate(
		api: ApiValues,
		ui: UiValues,
		logging: LoggingValues,
		sources: &ConfigSources,
	) -> Result<Self, ConfigError> {
		validation::validate(api, ui, logging, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
