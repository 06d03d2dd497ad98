use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;

use super::SearchError;
use super::request::{API_HOST_HEADER, API_KEY_HEADER, DEFAULT_ENDPOINT, RAPIDAPI_HOST, build_url};
use super::response::JobSearchResponse;
use crate::types::SearchQuery;

/// Anything that can answer a job search.
///
/// Implementations are called from worker threads, one call per submission.
pub trait JobSource: Send + Sync {
	fn fetch(&self, query: &SearchQuery) -> Result<JobSearchResponse, SearchError>;
}

/// RapidAPI credential. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
	#[must_use]
	pub fn new(key: impl Into<String>) -> Self {
		Self(key.into())
	}

	#[must_use]
	pub fn expose(&self) -> &str {
		&self.0
	}
}

impl fmt::Debug for ApiKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("ApiKey(<redacted>)")
	}
}

impl fmt::Display for ApiKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("<redacted>")
	}
}

/// Blocking client for the JSearch endpoint on RapidAPI.
#[derive(Debug, Clone)]
pub struct JSearchClient {
	http: Client,
	endpoint: String,
	api_key: ApiKey,
}

impl JSearchClient {
	/// Build a client. Without `timeout` a request may wait indefinitely.
	pub fn new(
		api_key: ApiKey,
		endpoint: Option<String>,
		timeout: Option<Duration>,
	) -> Result<Self, SearchError> {
		let mut builder = Client::builder().user_agent(concat!("jobsearch/", env!("CARGO_PKG_VERSION")));
		if let Some(timeout) = timeout {
			builder = builder.timeout(timeout);
		}
		Ok(Self {
			http: builder.build()?,
			endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
			api_key,
		})
	}

	#[must_use]
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}
}

impl JobSource for JSearchClient {
	fn fetch(&self, query: &SearchQuery) -> Result<JobSearchResponse, SearchError> {
		let url = build_url(&self.endpoint, query)?;
		tracing::debug!(endpoint = %self.endpoint, query = %query, "requesting job search");

		let response = self
			.http
			.get(url)
			.header(API_KEY_HEADER, self.api_key.expose())
			.header(API_HOST_HEADER, RAPIDAPI_HOST)
			.send()?;

		let status = response.status();
		if !status.is_success() {
			return Err(SearchError::Status(status));
		}

		let body = response.bytes()?;
		JobSearchResponse::from_slice(&body)
	}
}
