use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
	/// Nobody set the value.
	Default,
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
			Self::Default => f.write_str("defaults"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) api_key: Option<SettingSource>,
	pub(crate) api_endpoint: Option<SettingSource>,
	pub(crate) api_timeout: Option<SettingSource>,
	pub(crate) ui_theme: Option<SettingSource>,
	pub(crate) logging_level: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_api_key(&self) -> SettingSource {
		self.api_key.clone().unwrap_or(SettingSource::Default)
	}

	pub(crate) fn source_for_endpoint(&self) -> SettingSource {
		self.api_endpoint
			.clone()
			.unwrap_or(SettingSource::ConfigKey("api.endpoint"))
	}

	pub(crate) fn source_for_timeout(&self) -> SettingSource {
		self.api_timeout
			.clone()
			.unwrap_or(SettingSource::ConfigKey("api.timeout_secs"))
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.ui_theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}

	pub(crate) fn source_for_log_level(&self) -> SettingSource {
		self.logging_level.clone().unwrap_or(SettingSource::Default)
	}
}
