use serde::Deserialize;

use super::SearchError;
use crate::types::{JobRecord, SearchUiState, ensure_unique_ids, sort_newest_first};

/// Decoded body of a search response.
///
/// `data` stays optional so a payload without it can be told apart from an
/// empty result set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobSearchResponse {
	#[serde(default)]
	pub status: serde_json::Value,
	#[serde(default)]
	pub data: Option<Vec<JobRecord>>,
}

impl JobSearchResponse {
	/// Decode a raw response body.
	pub fn from_slice(body: &[u8]) -> Result<Self, SearchError> {
		Ok(serde_json::from_slice(body)?)
	}

	#[must_use]
	pub fn with_jobs(jobs: Vec<JobRecord>) -> Self {
		Self {
			status: serde_json::Value::String("OK".into()),
			data: Some(jobs),
		}
	}
}

/// Map the outcome of one request onto the state shown to the user.
///
/// Failures collapse into the generic error state; the cause is returned to
/// the caller only through the log.
pub fn interpret(outcome: Result<JobSearchResponse, SearchError>) -> SearchUiState {
	match outcome.and_then(|response| response.data.ok_or(SearchError::MissingData)) {
		Ok(jobs) if jobs.is_empty() => SearchUiState::empty_result(),
		Ok(mut jobs) => {
			sort_newest_first(&mut jobs);
			ensure_unique_ids(&mut jobs);
			SearchUiState::Success(jobs)
		}
		Err(err) => {
			tracing::warn!(error = %err, "job search failed");
			SearchUiState::error()
		}
	}
}

#[cfg(test)]
mod tests {
	use reqwest::StatusCode;

	use super::*;
	use crate::types::{EMPTY_RESULT_MESSAGE, SEARCH_ERROR_MESSAGE};

	fn job(id: &str, posted_at: i64) -> JobRecord {
		JobRecord {
			id: id.into(),
			employer_name: "Acme".into(),
			title: "Engineer".into(),
			location: "Remote".into(),
			description: String::new(),
			apply_link: String::new(),
			posted_at,
			employer_logo: None,
		}
	}

	#[test]
	fn non_empty_data_is_sorted_newest_first() {
		let state = interpret(Ok(JobSearchResponse::with_jobs(vec![
			job("a", 100),
			job("b", 300),
			job("c", 200),
		])));
		let times: Vec<i64> = state.jobs().iter().map(|job| job.posted_at).collect();
		assert_eq!(times, vec![300, 200, 100]);
		assert_eq!(state.label(), "success");
	}

	#[test]
	fn empty_data_is_not_an_error() {
		let state = interpret(Ok(JobSearchResponse::with_jobs(Vec::new())));
		assert_eq!(state, SearchUiState::EmptyResult(EMPTY_RESULT_MESSAGE.into()));
		assert!(state.jobs().is_empty());
	}

	#[test]
	fn missing_data_is_an_error() {
		let response = JobSearchResponse::from_slice(br#"{"status":"ERROR","message":"bad"}"#)
			.expect("decodes");
		assert!(response.data.is_none());
		assert_eq!(interpret(Ok(response)), SearchUiState::error());
	}

	#[test]
	fn failures_use_the_generic_message() {
		let state = interpret(Err(SearchError::Status(StatusCode::TOO_MANY_REQUESTS)));
		assert_eq!(state.message(), Some(SEARCH_ERROR_MESSAGE));
		assert!(!state.is_loading());
		assert!(state.jobs().is_empty());
	}

	#[test]
	fn undecodable_body_is_a_decode_error() {
		let err = JobSearchResponse::from_slice(b"<html>").unwrap_err();
		assert!(matches!(err, SearchError::Decode(_)));
	}

	#[test]
	fn decodes_upstream_payload() {
		let body = br#"{
			"status": "OK",
			"request_id": "r1",
			"data": [
				{"job_id": "1", "job_title": "Nurse", "job_posted_at_timestamp": 10},
				{"job_id": "2", "job_title": "Doctor", "job_posted_at_timestamp": 20}
			]
		}"#;
		let state = interpret(JobSearchResponse::from_slice(body));
		let ids: Vec<&str> = state.jobs().iter().map(|job| job.id.as_str()).collect();
		assert_eq!(ids, vec!["2", "1"]);
	}

	#[test]
	fn cards_without_distinct_ids_get_their_own() {
		let state = interpret(Ok(JobSearchResponse::with_jobs(vec![
			job("", 3),
			job("", 2),
			job("same", 1),
			job("same", 0),
		])));
		let ids: Vec<&str> = state.jobs().iter().map(|job| job.id.as_str()).collect();
		assert_eq!(ids, vec!["job-0", "job-1", "same", "same#2"]);
	}
}
