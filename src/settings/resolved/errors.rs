use std::fmt;

use thiserror::Error;

use super::SettingSource;

/// A setting that failed validation, tagged with the layer that supplied it.
#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}: {reason} (value: {offending})")]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	pub(crate) origin: SettingSource,
	offending: Offending,
	reason: String,
}

/// What the error message shows in place of the rejected value.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Offending {
	Unset,
	Blank,
	Given(String),
}

impl fmt::Display for Offending {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Unset => f.write_str("<unset>"),
			Self::Blank => f.write_str("<empty>"),
			Self::Given(value) => f.write_str(value),
		}
	}
}

impl ConfigError {
	/// A required setting that was never provided, or provided as whitespace.
	pub(crate) fn missing(
		key: &'static str,
		blank: bool,
		origin: SettingSource,
		reason: &str,
	) -> Self {
		Self {
			key,
			origin,
			offending: if blank { Offending::Blank } else { Offending::Unset },
			reason: reason.to_owned(),
		}
	}

	pub(crate) fn rejected(
		key: &'static str,
		value: impl fmt::Display,
		origin: SettingSource,
		reason: impl fmt::Display,
	) -> Self {
		Self {
			key,
			origin,
			offending: Offending::Given(value.to_string()),
			reason: reason.to_string(),
		}
	}
}
