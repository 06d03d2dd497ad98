use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use super::JobSource;
use super::commands::{SearchCommand, SearchResult};
use super::response::interpret;
use super::runtime::SearchRuntime;
use crate::types::{SearchQuery, SearchUiState};

/// Name prefix of the short-lived threads that run one request each.
pub(crate) const REQUEST_THREAD_PREFIX: &str = "jobsearch-request-";

/// Whether the calling thread is a request thread spawned by the worker.
pub(crate) fn is_request_thread() -> bool {
	thread::current()
		.name()
		.is_some_and(|name| name.starts_with(REQUEST_THREAD_PREFIX))
}

/// Launch the background search worker and return the handle used to talk to it.
pub fn spawn(source: Arc<dyn JobSource>) -> SearchRuntime {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let latest_query_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_query_id);

	thread::spawn(move || worker_loop(&source, command_rx, result_tx, thread_latest));

	SearchRuntime::new(command_tx, result_rx, latest_query_id)
}

fn worker_loop(
	source: &Arc<dyn JobSource>,
	command_rx: Receiver<SearchCommand>,
	result_tx: Sender<SearchResult>,
	latest_query_id: Arc<AtomicU64>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(source, &result_tx, &latest_query_id, command) {
			break;
		}
	}
}

fn handle_command(
	source: &Arc<dyn JobSource>,
	result_tx: &Sender<SearchResult>,
	latest_query_id: &Arc<AtomicU64>,
	command: SearchCommand,
) -> bool {
	match command {
		SearchCommand::Query { id, query } => {
			let source = Arc::clone(source);
			let tx = result_tx.clone();
			let latest = Arc::clone(latest_query_id);
			let spawned = thread::Builder::new()
				.name(format!("{REQUEST_THREAD_PREFIX}{id}"))
				.spawn(move || run_request(source.as_ref(), id, &query, &tx, &latest));
			if let Err(err) = spawned {
				tracing::warn!(id, error = %err, "failed to spawn request thread");
				let _ = result_tx.send(SearchResult {
					id,
					state: SearchUiState::error(),
				});
			}
			true
		}
		SearchCommand::Shutdown => false,
	}
}

fn run_request(
	source: &dyn JobSource,
	id: u64,
	query: &SearchQuery,
	result_tx: &Sender<SearchResult>,
	latest_query_id: &AtomicU64,
) {
	let _span = tracing::info_span!("search", id).entered();
	let mut slot = ResultSlot::new(id, result_tx, latest_query_id);
	slot.deliver(guarded_search(source, query));
}

/// Fetch and interpret, turning a panic anywhere along the way into the
/// generic error state.
fn guarded_search(source: &dyn JobSource, query: &SearchQuery) -> SearchUiState {
	panic::catch_unwind(AssertUnwindSafe(|| interpret(source.fetch(query)))).unwrap_or_else(|_| {
		tracing::warn!("job source panicked");
		SearchUiState::error()
	})
}

/// Owes the UI exactly one result for a request; dropping it undelivered
/// sends the generic error so `Loading` always ends.
struct ResultSlot<'a> {
	id: u64,
	result_tx: &'a Sender<SearchResult>,
	latest_query_id: &'a AtomicU64,
	delivered: bool,
}

impl<'a> ResultSlot<'a> {
	fn new(id: u64, result_tx: &'a Sender<SearchResult>, latest_query_id: &'a AtomicU64) -> Self {
		Self {
			id,
			result_tx,
			latest_query_id,
			delivered: false,
		}
	}

	fn deliver(&mut self, state: SearchUiState) {
		self.delivered = true;
		let id = self.id;

		if self.latest_query_id.load(Ordering::Acquire) != id {
			tracing::debug!(id, "dropping stale search result");
			return;
		}

		tracing::info!(id, state = state.label(), jobs = state.jobs().len(), "search finished");
		let _ = self.result_tx.send(SearchResult { id, state });
	}
}

impl Drop for ResultSlot<'_> {
	fn drop(&mut self) {
		if !self.delivered {
			tracing::warn!(id = self.id, "request ended without a result");
			self.deliver(SearchUiState::error());
		}
	}
}

/// Run a single search on the calling thread.
pub fn run_once(source: &dyn JobSource, query: &SearchQuery) -> SearchUiState {
	let state = guarded_search(source, query);
	tracing::info!(state = state.label(), jobs = state.jobs().len(), "search finished");
	state
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::search::testing::PanickingSource;
	use crate::types::SEARCH_ERROR_MESSAGE;

	#[test]
	fn undelivered_slot_reports_an_error() {
		let (tx, rx) = mpsc::channel();
		let latest = AtomicU64::new(4);
		drop(ResultSlot::new(4, &tx, &latest));

		let result = rx.try_recv().expect("result from dropped slot");
		assert_eq!(result.id, 4);
		assert_eq!(result.state, SearchUiState::Error(SEARCH_ERROR_MESSAGE.into()));
		assert!(rx.try_recv().is_err());
	}

	#[test]
	fn delivered_slot_sends_exactly_once() {
		let (tx, rx) = mpsc::channel();
		let latest = AtomicU64::new(2);
		let mut slot = ResultSlot::new(2, &tx, &latest);
		slot.deliver(SearchUiState::empty_result());
		drop(slot);

		assert_eq!(rx.try_recv().map(|result| result.state).ok(), Some(SearchUiState::empty_result()));
		assert!(rx.try_recv().is_err());
	}

	#[test]
	fn stale_slot_stays_silent_when_dropped() {
		let (tx, rx) = mpsc::channel();
		let latest = AtomicU64::new(9);
		drop(ResultSlot::new(3, &tx, &latest));
		assert!(rx.try_recv().is_err());
	}

	#[test]
	fn request_threads_are_recognised_by_name() {
		assert!(!is_request_thread());
		let named = thread::Builder::new()
			.name(format!("{REQUEST_THREAD_PREFIX}7"))
			.spawn(is_request_thread)
			.expect("spawn")
			.join()
			.expect("join");
		assert!(named);
	}

	#[test]
	fn batch_search_survives_a_panicking_source() {
		let query = SearchQuery::from_raw("Nurse", "Boston").expect("query");
		assert_eq!(run_once(&PanickingSource, &query), SearchUiState::error());
	}
}
