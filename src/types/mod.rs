//! Types shared across the form, the search orchestrator and the renderer.

mod job;
mod query;
mod state;

pub use job::{JobRecord, ensure_unique_ids, sort_newest_first};
pub use query::SearchQuery;
pub use state::{EMPTY_RESULT_MESSAGE, SEARCH_ERROR_MESSAGE, SearchUiState};
