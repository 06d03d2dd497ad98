use std::fmt::Write;

use anyhow::Result;
use jobsearch::tui::components::format_posted_date;
use jobsearch::{JobRecord, SearchQuery, SearchUiState};
use serde::Serialize;

/// Shape of the JSON printed in batch mode.
#[derive(Debug, Serialize)]
struct BatchReport<'a> {
	query: String,
	state: &'static str,
	message: Option<&'a str>,
	jobs: &'a [JobRecord],
}

/// Format the outcome of a batch search as readable text.
pub(crate) fn format_plain(query: &SearchQuery, state: &SearchUiState) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "{query}");

	if let Some(message) = state.message() {
		let _ = writeln!(out, "{message}");
		return out;
	}

	let jobs = state.jobs();
	let noun = if jobs.len() == 1 { "job" } else { "jobs" };
	let _ = writeln!(out, "{} {noun}, newest first", jobs.len());
	for job in jobs {
		let _ = writeln!(out);
		let _ = writeln!(out, "{}", job.title);
		let _ = writeln!(out, "  {} - {}", job.employer_name, job.location);
		let _ = writeln!(out, "  Posted {}", format_posted_date(job.posted_at));
		let _ = writeln!(out, "  {}", job.apply_link);
	}
	out
}

/// Format the outcome of a batch search as pretty JSON.
pub(crate) fn format_json(query: &SearchQuery, state: &SearchUiState) -> Result<String> {
	let report = BatchReport {
		query: query.query_string(),
		state: state.label(),
		message: state.message(),
		jobs: state.jobs(),
	};
	Ok(serde_json::to_string_pretty(&report)?)
}

pub(crate) fn print_plain(query: &SearchQuery, state: &SearchUiState) {
	print!("{}", format_plain(query, state));
}

pub(crate) fn print_json(query: &SearchQuery, state: &SearchUiState) -> Result<()> {
	println!("{}", format_json(query, state)?);
	Ok(())
}
