use serde::Deserialize;

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ApiSection {
	pub(super) key: Option<String>,
	pub(super) endpoint: Option<String>,
	pub(super) timeout_secs: Option<u64>,
}

/// API values after merging, still unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ApiValues {
	pub(crate) key: Option<String>,
	pub(crate) endpoint: Option<String>,
	pub(crate) timeout_secs: Option<u64>,
}

impl ApiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(key) = &cli.api_key {
			self.key = Some(key.clone());
		}
		if let Some(endpoint) = &cli.endpoint {
			self.endpoint = Some(endpoint.clone());
		}
		if let Some(timeout) = cli.timeout {
			self.timeout_secs = Some(timeout);
		}
	}

	pub(super) fn finalize(self) -> ApiValues {
		ApiValues {
			key: self.key,
			endpoint: self.endpoint,
			timeout_secs: self.timeout_secs,
		}
	}
}
