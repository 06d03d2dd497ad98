use std::time::Duration;

use jobsearch::logging::{LoggingSettings, validate_level};
use jobsearch::search::{ApiKey, DEFAULT_ENDPOINT};
use jobsearch::tui::ThemeMode;
use url::Url;

use super::super::raw::{ApiValues, LoggingValues, UiValues};
use super::{ApiSettings, ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	api: ApiValues,
	ui: UiValues,
	logging: LoggingValues,
	sources: &ConfigSources,
) -> Result<ResolvedConfig, ConfigError> {
	let key = match api.key.as_deref().map(str::trim) {
		Some(key) if !key.is_empty() => ApiKey::new(key),
		given => {
			return Err(ConfigError::missing(
				"api.key",
				given.is_some(),
				sources.source_for_api_key(),
				"an API key is required",
			));
		}
	};

	let endpoint = api.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
	match Url::parse(&endpoint) {
		Ok(url) if matches!(url.scheme(), "http" | "https") => {}
		Ok(_) => {
			return Err(ConfigError::rejected(
				"api.endpoint",
				endpoint,
				sources.source_for_endpoint(),
				"must be an http or https URL",
			));
		}
		Err(err) => {
			return Err(ConfigError::rejected(
				"api.endpoint",
				endpoint,
				sources.source_for_endpoint(),
				err.to_string(),
			));
		}
	}

	if let Some(timeout) = api.timeout_secs
		&& timeout == 0
	{
		return Err(ConfigError::rejected(
			"api.timeout_secs",
			timeout.to_string(),
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	let theme = match ui.theme {
		Some(raw) => raw.parse::<ThemeMode>().map_err(|err| {
			ConfigError::rejected("ui.theme", raw.clone(), sources.source_for_theme(), err.to_string())
		})?,
		None => ThemeMode::default(),
	};

	if let Err(reason) = validate_level(&logging.level) {
		return Err(ConfigError::rejected(
			"logging.level",
			logging.level,
			sources.source_for_log_level(),
			reason,
		));
	}

	Ok(ResolvedConfig {
		api: ApiSettings {
			key,
			endpoint,
			timeout: api.timeout_secs.map(Duration::from_secs),
		},
		theme,
		job_title: ui.job_title,
		location: ui.location,
		logging: LoggingSettings {
			level: logging.level,
			file: logging.file,
		},
	})
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::super::SettingSource;
	use super::*;

	fn api(key: Option<&str>) -> ApiValues {
		ApiValues {
			key: key.map(str::to_string),
			endpoint: None,
			timeout_secs: None,
		}
	}

	fn logging_values() -> LoggingValues {
		LoggingValues {
			level: "info".into(),
			file: PathBuf::from("/tmp/jobsearch.log"),
		}
	}

	#[test]
	fn resolves_defaults_once_a_key_is_present() {
		let config = validate(
			api(Some("  secret ")),
			UiValues::default(),
			logging_values(),
			&ConfigSources::default(),
		)
		.unwrap();

		assert_eq!(config.api.key.expose(), "secret");
		assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
		assert_eq!(config.api.timeout, None);
		assert_eq!(config.theme, ThemeMode::Light);
	}

	#[test]
	fn blank_key_names_its_origin() {
		let sources = ConfigSources {
			api_key: Some(SettingSource::Environment("JOBSEARCH__API__KEY")),
			..ConfigSources::default()
		};
		let err = validate(api(Some("   ")), UiValues::default(), logging_values(), &sources)
			.unwrap_err();

		assert_eq!(err.key, "api.key");
		assert_eq!(
			err.to_string(),
			"invalid value for api.key from environment variable `JOBSEARCH__API__KEY`: an API key is required (value: <empty>)"
		);
	}

	#[test]
	fn rejects_zero_timeout() {
		let values = ApiValues {
			timeout_secs: Some(0),
			..api(Some("secret"))
		};
		let sources = ConfigSources {
			api_timeout: Some(SettingSource::CliFlag("--timeout")),
			..ConfigSources::default()
		};

		let err = validate(values, UiValues::default(), logging_values(), &sources).unwrap_err();
		assert_eq!(err.key, "api.timeout_secs");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag `--timeout`"));
	}

	#[test]
	fn rejects_non_http_endpoint() {
		let values = ApiValues {
			endpoint: Some("ftp://example.com/search".into()),
			..api(Some("secret"))
		};

		let err = validate(
			values,
			UiValues::default(),
			logging_values(),
			&ConfigSources::default(),
		)
		.unwrap_err();
		assert_eq!(err.key, "api.endpoint");
		assert!(err.to_string().contains("configuration key `api.endpoint`"));
	}

	#[test]
	fn rejects_unknown_theme() {
		let ui = UiValues {
			theme: Some("sepia".into()),
			..UiValues::default()
		};

		let err = validate(api(Some("secret")), ui, logging_values(), &ConfigSources::default())
			.unwrap_err();
		assert_eq!(err.key, "ui.theme");
		assert!(err.to_string().contains("value: sepia"));
	}

	#[test]
	fn rejects_invalid_log_level() {
		let logging = LoggingValues {
			level: "jobsearch=loud".into(),
			..logging_values()
		};

		let err = validate(api(Some("secret")), UiValues::default(), logging, &ConfigSources::default())
			.unwrap_err();
		assert_eq!(err.key, "logging.level");
		assert!(err.to_string().contains("from defaults"));
	}
}
