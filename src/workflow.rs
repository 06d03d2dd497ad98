use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use jobsearch::app::{self, AppOptions};
use jobsearch::logging;
use jobsearch::search::{JSearchClient, JobSource, run_once};
use jobsearch::{SearchQuery, SearchUiState};

use crate::cli::{OutputFormat, print_json, print_plain};
use crate::settings::{ApiSettings, ResolvedConfig};

/// How the binary was asked to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunMode {
	Interactive,
	Batch(OutputFormat),
}

/// Coordinates building the API client and running either the terminal UI or
/// a single batch search.
pub(crate) struct SearchWorkflow {
	source: Arc<dyn JobSource>,
	options: AppOptions,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			api,
			theme,
			job_title,
			location,
			logging: log_settings,
		} = config;

		logging::initialize(&log_settings)?;
		let source = build_source(api)?;

		Ok(Self {
			source,
			options: AppOptions {
				theme,
				job_title,
				location,
			},
		})
	}

	pub(crate) fn run(self, mode: RunMode) -> Result<ExitCode> {
		match mode {
			RunMode::Interactive => {
				app::run(self.source, self.options)?;
				Ok(ExitCode::SUCCESS)
			}
			RunMode::Batch(format) => self.run_batch(format),
		}
	}

	fn run_batch(self, format: OutputFormat) -> Result<ExitCode> {
		let query = SearchQuery::from_raw(&self.options.job_title, &self.options.location)
			.map_err(|errors| anyhow!("cannot search: {errors}"))?;
		let state = run_once(self.source.as_ref(), &query);

		match format {
			OutputFormat::Plain => print_plain(&query, &state),
			OutputFormat::Json => print_json(&query, &state)?,
		}

		Ok(exit_code_for(&state))
	}
}

fn build_source(api: ApiSettings) -> Result<Arc<dyn JobSource>> {
	let client = JSearchClient::new(api.key, Some(api.endpoint), api.timeout)
		.context("failed to build the HTTP client")?;
	Ok(Arc::new(client))
}

fn exit_code_for(state: &SearchUiState) -> ExitCode {
	match state {
		SearchUiState::Error(_) => ExitCode::FAILURE,
		_ => ExitCode::SUCCESS,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_errors_fail_the_process() {
		assert_eq!(exit_code_for(&SearchUiState::error()), ExitCode::FAILURE);
		assert_eq!(exit_code_for(&SearchUiState::empty_result()), ExitCode::SUCCESS);
		assert_eq!(exit_code_for(&SearchUiState::Success(Vec::new())), ExitCode::SUCCESS);
	}
}
