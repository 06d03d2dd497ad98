//! In-process job sources for tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::Receiver;

use super::{JobSearchResponse, JobSource, SearchError};
use crate::types::{JobRecord, SearchQuery};

pub(crate) fn job(id: &str, posted_at: i64) -> JobRecord {
	JobRecord {
		id: id.into(),
		employer_name: format!("{id} Corp"),
		title: format!("{id} engineer"),
		location: "Raleigh, NC".into(),
		description: "Ship software.".into(),
		apply_link: format!("https://example.com/{id}"),
		posted_at,
		employer_logo: None,
	}
}

/// Replays canned outcomes in order; answers `MissingData` once exhausted.
pub(crate) struct FakeSource {
	outcomes: Mutex<VecDeque<Result<JobSearchResponse, SearchError>>>,
	calls: AtomicUsize,
}

impl FakeSource {
	pub(crate) fn new(
		outcomes: impl IntoIterator<Item = Result<JobSearchResponse, SearchError>>,
	) -> Self {
		Self {
			outcomes: Mutex::new(outcomes.into_iter().collect()),
			calls: AtomicUsize::new(0),
		}
	}

	pub(crate) fn empty() -> Self {
		Self::new([Ok(JobSearchResponse::with_jobs(Vec::new()))])
	}

	pub(crate) fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

impl JobSource for FakeSource {
	fn fetch(&self, _query: &SearchQuery) -> Result<JobSearchResponse, SearchError> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.outcomes
			.lock()
			.expect("fake source lock")
			.pop_front()
			.unwrap_or(Err(SearchError::MissingData))
	}
}

/// Blocks searches for `blocked_title` until the gate fires; answers others immediately.
pub(crate) struct GatedSource {
	blocked_title: String,
	gate: Mutex<Receiver<()>>,
}

impl GatedSource {
	pub(crate) fn new(blocked_title: &str, gate: Receiver<()>) -> Self {
		Self {
			blocked_title: blocked_title.to_string(),
			gate: Mutex::new(gate),
		}
	}
}

impl JobSource for GatedSource {
	fn fetch(&self, query: &SearchQuery) -> Result<JobSearchResponse, SearchError> {
		if query.job_title() == self.blocked_title {
			let _ = self.gate.lock().expect("gate lock").recv();
			return Ok(JobSearchResponse::with_jobs(vec![job("stale", 1)]));
		}
		Ok(JobSearchResponse::with_jobs(vec![job(query.job_title(), 2)]))
	}
}

pub(crate) struct PanickingSource;

impl JobSource for PanickingSource {
	fn fetch(&self, _query: &SearchQuery) -> Result<JobSearchResponse, SearchError> {
		panic!("source exploded");
	}
}
