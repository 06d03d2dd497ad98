//! Resolve configuration and data directories for `jobsearch`.
//!
//! Environment overrides win; otherwise the platform locations from the
//! `directories` crate are used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "jobsearch";
const APPLICATION: &str = "jobsearch";

pub const CONFIG_DIR_ENV: &str = "JOBSEARCH_CONFIG_DIR";
pub const DATA_DIR_ENV: &str = "JOBSEARCH_DATA_DIR";

/// File name of the default log inside the data directory.
pub const LOG_FILE_NAME: &str = "jobsearch.log";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for jobsearch"))
}

/// An empty value counts as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory holding the log file.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Default log location, `<data dir>/jobsearch.log`.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(LOG_FILE_NAME))
}
