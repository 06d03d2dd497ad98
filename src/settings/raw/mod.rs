use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod api;
mod logging;
mod ui;

use api::ApiSection;
use logging::LoggingSection;
use ui::UiSection;

pub(super) use api::ApiValues;
pub(super) use logging::LoggingValues;
pub(super) use ui::UiValues;

/// Environment variable the RapidAPI dashboard tells users to export.
const RAPIDAPI_KEY_ENV: &str = "RAPIDAPI_KEY";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	api: ApiSection,
	ui: UiSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.api.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			api_key: api_key_source(cli, self.api.key.is_some()),
			api_endpoint: detect_source(
				cli.endpoint.is_some(),
				self.api.endpoint.is_some(),
				"JOBSEARCH__API__ENDPOINT",
				"--endpoint",
				"api.endpoint",
			),
			api_timeout: detect_source(
				cli.timeout.is_some(),
				self.api.timeout_secs.is_some(),
				"JOBSEARCH__API__TIMEOUT_SECS",
				"--timeout",
				"api.timeout_secs",
			),
			ui_theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"JOBSEARCH__UI__THEME",
				"--theme",
				"ui.theme",
			),
			logging_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"JOBSEARCH__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let api = self.api.finalize();
		let ui = self.ui.finalize();
		let logging = self.logging.finalize();

		let config = ResolvedConfig::validate(api, ui, logging, &sources).map_err(Error::new)?;

		Ok(config)
	}
}

/// The key flag doubles as `RAPIDAPI_KEY`, so a CLI value that matches the
/// environment is reported as coming from the environment.
fn api_key_source(cli: &CliArgs, value_present: bool) -> Option<SettingSource> {
	if let Some(key) = cli.api_key.as_deref()
		&& env::var(RAPIDAPI_KEY_ENV).is_ok_and(|value| value == key)
	{
		return Some(SettingSource::Environment(RAPIDAPI_KEY_ENV));
	}

	detect_source(
		cli.api_key.is_some(),
		value_present,
		"JOBSEARCH__API__KEY",
		"--api-key",
		"api.key",
	)
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
