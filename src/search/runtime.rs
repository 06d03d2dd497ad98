use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::SearchError;
use super::commands::{SearchCommand, SearchResult};
use crate::types::SearchQuery;

/// UI-side handle to the search worker.
///
/// Every submission gets a fresh generation id. Only the newest id is
/// considered current; older responses are dropped by the worker or ignored
/// by [`SearchRuntime::is_current`].
pub struct SearchRuntime {
	command_tx: Sender<SearchCommand>,
	result_rx: Receiver<SearchResult>,
	latest_query_id: Arc<AtomicU64>,
	next_query_id: u64,
}

impl SearchRuntime {
	pub(crate) fn new(
		command_tx: Sender<SearchCommand>,
		result_rx: Receiver<SearchResult>,
		latest_query_id: Arc<AtomicU64>,
	) -> Self {
		Self {
			command_tx,
			result_rx,
			latest_query_id,
			next_query_id: 0,
		}
	}

	/// Dispatch `query` and return its generation id.
	pub fn submit(&mut self, query: SearchQuery) -> Result<u64, SearchError> {
		self.next_query_id = self.next_query_id.saturating_add(1);
		let id = self.next_query_id;
		self.latest_query_id.store(id, Ordering::Release);
		tracing::debug!(id, query = %query, "dispatching search");
		self.command_tx
			.send(SearchCommand::Query { id, query })
			.map_err(|_| SearchError::WorkerUnavailable)?;
		Ok(id)
	}

	/// Take the next finished result without blocking.
	///
	/// Returns `Err(WorkerUnavailable)` once the worker and every request
	/// thread are gone.
	pub fn try_recv(&self) -> Result<Option<SearchResult>, SearchError> {
		match self.result_rx.try_recv() {
			Ok(result) => Ok(Some(result)),
			Err(TryRecvError::Empty) => Ok(None),
			Err(TryRecvError::Disconnected) => Err(SearchError::WorkerUnavailable),
		}
	}

	#[must_use]
	pub fn is_current(&self, id: u64) -> bool {
		id != 0 && self.latest_query_id.load(Ordering::Acquire) == id
	}

	/// Ask the worker to stop accepting new searches.
	pub fn shutdown(&self) {
		let _ = self.command_tx.send(SearchCommand::Shutdown);
	}
}

impl Drop for SearchRuntime {
	fn drop(&mut self) {
		self.shutdown();
	}
}
