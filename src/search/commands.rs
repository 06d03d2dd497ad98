use crate::types::{SearchQuery, SearchUiState};

/// Commands understood by the background search worker.
#[derive(Debug)]
pub(crate) enum SearchCommand {
	/// Run one search.
	Query {
		/// Generation id used to correlate the response with the submission.
		id: u64,
		query: SearchQuery,
	},
	/// Stop the background worker thread.
	Shutdown,
}

/// Terminal state for one request, sent back to the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
	/// Identifier matching the [`SearchCommand::Query`] that produced the result.
	pub id: u64,
	pub state: SearchUiState,
}
