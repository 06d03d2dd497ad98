use super::JobRecord;

/// Generic message shown for any transport, status or decoding failure.
pub const SEARCH_ERROR_MESSAGE: &str =
	"An error occurred while searching for jobs. Please try again.";

/// Guidance shown when the upstream search returns no listings.
pub const EMPTY_RESULT_MESSAGE: &str =
	"No jobs found within 5 miles with that job title, please try another job title.";

/// The mutually exclusive states that decide what the results area shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchUiState {
	#[default]
	Idle,
	Loading,
	Success(Vec<JobRecord>),
	EmptyResult(String),
	Error(String),
}

impl SearchUiState {
	#[must_use]
	pub fn empty_result() -> Self {
		Self::EmptyResult(EMPTY_RESULT_MESSAGE.to_string())
	}

	#[must_use]
	pub fn error() -> Self {
		Self::Error(SEARCH_ERROR_MESSAGE.to_string())
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading)
	}

	/// Records to render; empty for every state other than `Success`.
	#[must_use]
	pub fn jobs(&self) -> &[JobRecord] {
		match self {
			Self::Success(jobs) => jobs,
			_ => &[],
		}
	}

	/// The user facing message for the empty and error states.
	#[must_use]
	pub fn message(&self) -> Option<&str> {
		match self {
			Self::EmptyResult(message) | Self::Error(message) => Some(message),
			_ => None,
		}
	}

	/// Short machine-readable label used in logs and JSON output.
	#[must_use]
	pub fn label(&self) -> &'static str {
		match self {
			Self::Idle => "idle",
			Self::Loading => "loading",
			Self::Success(_) => "success",
			Self::EmptyResult(_) => "empty",
			Self::Error(_) => "error",
		}
	}
}
