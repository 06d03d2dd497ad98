use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, ThemeArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `jobsearch` binary.
#[derive(Parser, Debug)]
#[command(
	name = "jobsearch",
	version,
	long_version = long_version(),
	about = "Search recent full-time job listings from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "JOBSEARCH_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long = "api-key",
		value_name = "KEY",
		env = "RAPIDAPI_KEY",
		hide_env_values = true,
		help = "RapidAPI key used for the JSearch API (default: from configuration)"
	)]
	pub(crate) api_key: Option<String>,
	#[arg(
		long,
		value_name = "URL",
		help = "Override the search endpoint (default: https://jsearch.p.rapidapi.com/search)"
	)]
	pub(crate) endpoint: Option<String>,
	#[arg(
		long,
		value_name = "SECONDS",
		help = "Give up on a search after this many seconds (default: no timeout)"
	)]
	pub(crate) timeout: Option<u64>,
	#[arg(long, value_enum, help = "Colour theme to start with (default: light)")]
	pub(crate) theme: Option<ThemeArg>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Prefill the job title field (default: empty)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'L',
		long,
		value_name = "LOCATION",
		help = "Prefill the location field (default: empty)"
	)]
	pub(crate) location: Option<String>,
	#[arg(
		short = 'b',
		long,
		help = "Run one search with --title and --location and print the results (default: interactive)"
	)]
	pub(crate) batch: bool,
	#[arg(
		short = 'o',
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Output format for batch mode"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		help = "Log filter directive, e.g. `debug` (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to this file (default: <data dir>/jobsearch.log)"
	)]
	pub(crate) log_file: Option<PathBuf>,
}
