//! Route `tracing` output to a log file.
//!
//! The terminal belongs to the UI, so nothing is ever written to stdout or
//! stderr once the subscriber is installed.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Default filter when none is configured.
pub const DEFAULT_LEVEL: &str = "info";

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
	pub level: String,
	pub file: PathBuf,
}

/// Check that `level` is a usable filter directive.
pub fn validate_level(level: &str) -> Result<(), String> {
	EnvFilter::try_new(level)
		.map(|_| ())
		.map_err(|err| err.to_string())
}

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
pub fn initialize(settings: &LoggingSettings) -> Result<()> {
	let file = open_log_file(&settings.file)?;
	let filter = EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new(&settings.level))
		.with_context(|| format!("invalid log filter `{}`", settings.level))?;

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(false)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

	tracing::info!(version = env!("CARGO_PKG_VERSION"), "jobsearch starting");
	Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}

	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}
