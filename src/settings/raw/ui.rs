use serde::Deserialize;

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) job_title: Option<String>,
	pub(super) location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct UiValues {
	pub(crate) theme: Option<String>,
	pub(crate) job_title: String,
	pub(crate) location: String,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme {
			self.theme = Some(theme.as_str().to_string());
		}
		if let Some(title) = &cli.title {
			self.job_title = Some(title.clone());
		}
		if let Some(location) = &cli.location {
			self.location = Some(location.clone());
		}
	}

	pub(super) fn finalize(self) -> UiValues {
		UiValues {
			theme: self.theme,
			job_title: self.job_title.unwrap_or_default(),
			location: self.location.unwrap_or_default(),
		}
	}
}
