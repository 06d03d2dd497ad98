use std::collections::{HashMap, HashSet};

use crate::types::JobRecord;

/// Expand/collapse flags for job descriptions, keyed by record id.
#[derive(Debug, Default, Clone)]
pub struct CardStates {
	expanded: HashMap<String, bool>,
}

impl CardStates {
	#[must_use]
	pub fn is_expanded(&self, id: &str) -> bool {
		self.expanded.get(id).copied().unwrap_or(false)
	}

	/// Flip the flag for `id` and return the new value.
	pub fn toggle(&mut self, id: &str) -> bool {
		let flag = self.expanded.entry(id.to_string()).or_insert(false);
		*flag = !*flag;
		*flag
	}

	/// Forget every card that is not part of `jobs`.
	pub fn retain_ids(&mut self, jobs: &[JobRecord]) {
		let ids: HashSet<&str> = jobs.iter().map(|job| job.id.as_str()).collect();
		self.expanded.retain(|id, _| ids.contains(id.as_str()));
	}
}
