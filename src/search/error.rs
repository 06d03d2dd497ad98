use reqwest::StatusCode;
use thiserror::Error;

/// Failures while talking to the upstream search API.
///
/// None of these reach the user verbatim; they are logged and collapsed into
/// the generic search error message.
#[derive(Error, Debug)]
pub enum SearchError {
	#[error("URL parse error: {0}")]
	Url(#[from] url::ParseError),
	#[error("HTTP error: {0}")]
	Http(#[from] reqwest::Error),
	#[error("upstream responded with status {0}")]
	Status(StatusCode),
	#[error("JSON error: {0}")]
	Decode(#[from] serde_json::Error),
	#[error("response body has no `data` array")]
	MissingData,
	#[error("search worker is unavailable")]
	WorkerUnavailable,
}
