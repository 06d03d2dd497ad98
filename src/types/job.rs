use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

/// A single listing returned by the upstream search API.
///
/// Field names are normalized from the upstream `job_*` wire names. Text
/// fields missing from the payload become empty strings and a missing
/// timestamp becomes `0`, which sorts after every real posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
	#[serde(rename(deserialize = "job_id"), default, deserialize_with = "string_or_default")]
	pub id: String,
	#[serde(default, deserialize_with = "string_or_default")]
	pub employer_name: String,
	#[serde(rename(deserialize = "job_title"), default, deserialize_with = "string_or_default")]
	pub title: String,
	#[serde(rename(deserialize = "job_location"), default, deserialize_with = "string_or_default")]
	pub location: String,
	#[serde(rename(deserialize = "job_description"), default, deserialize_with = "string_or_default")]
	pub description: String,
	#[serde(rename(deserialize = "job_apply_link"), default, deserialize_with = "string_or_default")]
	pub apply_link: String,
	#[serde(rename(deserialize = "job_posted_at_timestamp"), default, deserialize_with = "timestamp_or_zero")]
	pub posted_at: i64,
	#[serde(default, deserialize_with = "non_empty")]
	pub employer_logo: Option<String>,
}

impl JobRecord {
	/// Whether the employer provided a logo URL.
	#[must_use]
	pub fn has_logo(&self) -> bool {
		self.employer_logo.is_some()
	}
}

/// Sort records so the most recent posting comes first.
///
/// The sort is stable: postings with the same timestamp keep upstream order.
pub fn sort_newest_first(records: &mut [JobRecord]) {
	records.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
}

/// Give every record an id no other record in the set shares.
///
/// Blank ids become `job-<index>`; repeats of an id already seen get a `#<n>`
/// suffix. Per-card UI state is keyed by id, so this runs before records
/// reach the renderer.
pub fn ensure_unique_ids(records: &mut [JobRecord]) {
	let mut seen = HashSet::with_capacity(records.len());
	for (index, record) in records.iter_mut().enumerate() {
		let base = if record.id.is_empty() {
			format!("job-{index}")
		} else {
			record.id.clone()
		};

		let mut candidate = base.clone();
		let mut copy = 1;
		while !seen.insert(candidate.clone()) {
			copy += 1;
			candidate = format!("{base}#{copy}");
		}
		record.id = candidate;
	}
}

fn string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn timestamp_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Option::<String>::deserialize(deserializer)?;
	Ok(value.filter(|logo| !logo.trim().is_empty()))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(id: &str, posted_at: i64) -> JobRecord {
		JobRecord {
			id: id.into(),
			employer_name: "Acme".into(),
			title: "Engineer".into(),
			location: "Raleigh, NC".into(),
			description: String::new(),
			apply_link: "https://example.com/apply".into(),
			posted_at,
			employer_logo: None,
		}
	}

	#[test]
	fn deserializes_upstream_field_names() {
		let payload = r#"{
			"job_id": "abc",
			"employer_name": "Acme",
			"job_title": "Software Engineer",
			"job_location": "Raleigh, NC",
			"job_description": "Build things",
			"job_apply_link": "https://example.com/apply",
			"job_posted_at_timestamp": 1700000000,
			"employer_logo": "https://example.com/logo.png",
			"job_is_remote": false
		}"#;

		let job: JobRecord = serde_json::from_str(payload).expect("parse job");
		assert_eq!(job.id, "abc");
		assert_eq!(job.title, "Software Engineer");
		assert_eq!(job.location, "Raleigh, NC");
		assert_eq!(job.posted_at, 1_700_000_000);
		assert!(job.has_logo());
	}

	#[test]
	fn missing_and_null_fields_fall_back() {
		let payload = r#"{
			"job_id": "x",
			"employer_name": null,
			"job_posted_at_timestamp": null,
			"employer_logo": ""
		}"#;

		let job: JobRecord = serde_json::from_str(payload).expect("parse job");
		assert_eq!(job.employer_name, "");
		assert_eq!(job.description, "");
		assert_eq!(job.posted_at, 0);
		assert!(!job.has_logo());
	}

	#[test]
	fn newest_first_orders_by_timestamp() {
		let mut records = vec![record("old", 100), record("new", 200)];
		sort_newest_first(&mut records);
		let order: Vec<i64> = records.iter().map(|job| job.posted_at).collect();
		assert_eq!(order, vec![200, 100]);
	}

	#[test]
	fn equal_timestamps_keep_upstream_order() {
		let mut records = vec![record("a", 5), record("b", 9), record("c", 5)];
		sort_newest_first(&mut records);
		let ids: Vec<&str> = records.iter().map(|job| job.id.as_str()).collect();
		assert_eq!(ids, vec!["b", "a", "c"]);
	}

	#[test]
	fn blank_and_repeated_ids_are_made_unique() {
		let mut records = vec![
			record("", 4),
			record("dup", 3),
			record("", 2),
			record("dup", 1),
			record("job-0", 0),
		];
		ensure_unique_ids(&mut records);
		let ids: Vec<&str> = records.iter().map(|job| job.id.as_str()).collect();
		assert_eq!(ids, vec!["job-0", "dup", "job-2", "dup#2", "job-0#2"]);
	}

	#[test]
	fn distinct_ids_are_left_alone() {
		let mut records = vec![record("a", 1), record("b", 2)];
		ensure_unique_ids(&mut records);
		assert_eq!(records[0].id, "a");
		assert_eq!(records[1].id, "b");
	}
}
