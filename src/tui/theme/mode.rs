use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{DARK, LIGHT, Theme};

/// Light or dark rendering of the whole interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
	#[default]
	Light,
	Dark,
}

impl ThemeMode {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}

	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}

	#[must_use]
	pub fn theme(self) -> Theme {
		match self {
			Self::Light => LIGHT,
			Self::Dark => DARK,
		}
	}
}

impl fmt::Display for ThemeMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme mode `{0}`, expected `light` or `dark`")]
pub struct UnknownThemeMode(pub String);

impl FromStr for ThemeMode {
	type Err = UnknownThemeMode;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"light" => Ok(Self::Light),
			"dark" => Ok(Self::Dark),
			_ => Err(UnknownThemeMode(s.to_string())),
		}
	}
}
