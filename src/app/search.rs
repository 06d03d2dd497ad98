use crate::search::SearchResult;
use crate::types::SearchUiState;

use super::App;

impl<'a> App<'a> {
	/// Validate the form and, when it passes, dispatch a new search.
	///
	/// Any earlier request keeps running but its response will be ignored.
	pub fn submit_search(&mut self) {
		let Some(query) = self.form.submit() else {
			tracing::debug!(errors = %self.form.errors(), "search form rejected");
			return;
		};

		self.state = SearchUiState::Loading;
		self.selected = None;
		self.scroll_offset = 0;

		if let Err(err) = self.search.submit(query) {
			tracing::warn!(error = %err, "could not dispatch search");
			self.state = SearchUiState::error();
		}
	}

	/// Drain finished searches from the worker.
	pub fn pump_search_results(&mut self) {
		loop {
			match self.search.try_recv() {
				Ok(Some(result)) => self.handle_search_result(result),
				Ok(None) => break,
				Err(err) => {
					if self.state.is_loading() {
						tracing::warn!(error = %err, "search worker went away mid-request");
						self.state = SearchUiState::error();
					}
					break;
				}
			}
		}
	}

	/// Apply a result if it answers the most recent submission.
	fn handle_search_result(&mut self, result: SearchResult) {
		if !self.search.is_current(result.id) {
			tracing::debug!(id = result.id, "ignoring stale search result");
			return;
		}

		let jobs = result.state.jobs();
		self.cards.retain_ids(jobs);
		self.selected = (!jobs.is_empty()).then_some(0);
		self.scroll_offset = 0;
		self.state = result.state;
	}
}
