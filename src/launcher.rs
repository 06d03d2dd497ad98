//! Hand apply links to the platform's default browser.

use std::io;
use std::process::{Command, Stdio};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
	#[error("refusing to open non-web link `{0}`")]
	UnsupportedScheme(String),
	#[error("failed to start `{program}`: {source}")]
	Spawn {
		program: &'static str,
		#[source]
		source: io::Error,
	},
}

/// Signature shared by [`open_in_browser`] and test doubles.
pub type Opener = fn(&str) -> Result<(), LaunchError>;

/// Open `url` in a new browser context without waiting for it to close.
pub fn open_in_browser(url: &str) -> Result<(), LaunchError> {
	ensure_web_link(url)?;
	let (program, mut command) = platform_command(url);
	command
		.stdin(Stdio::null())
		.stdout(Stdio::null())
		.stderr(Stdio::null())
		.spawn()
		.map_err(|source| LaunchError::Spawn { program, source })?;
	tracing::info!(url, program, "opened apply link");
	Ok(())
}

fn ensure_web_link(url: &str) -> Result<(), LaunchError> {
	match url::Url::parse(url) {
		Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
		_ => Err(LaunchError::UnsupportedScheme(url.to_string())),
	}
}

#[cfg(target_os = "windows")]
fn platform_command(url: &str) -> (&'static str, Command) {
	let mut command = Command::new("cmd");
	command.args(["/C", "start", ""]).arg(url);
	("cmd", command)
}

#[cfg(target_os = "macos")]
fn platform_command(url: &str) -> (&'static str, Command) {
	let mut command = Command::new("open");
	command.arg(url);
	("open", command)
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn platform_command(url: &str) -> (&'static str, Command) {
	let mut command = Command::new("xdg-open");
	command.arg(url);
	("xdg-open", command)
}
