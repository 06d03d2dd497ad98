use std::fmt;

use serde::Serialize;

use crate::form::{FieldErrors, sanitize};

/// Sanitized search terms for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
	job_title: String,
	location: String,
}

impl SearchQuery {
	/// Validate raw field values and build a sanitized query.
	///
	/// Emptiness is checked on the raw input before sanitization, so the
	/// error set always reflects what the user typed.
	pub fn from_raw(job_title: &str, location: &str) -> Result<Self, FieldErrors> {
		let errors = FieldErrors::validate(job_title, location);
		if !errors.is_empty() {
			return Err(errors);
		}

		Ok(Self {
			job_title: sanitize(job_title),
			location: sanitize(location),
		})
	}

	#[must_use]
	pub fn job_title(&self) -> &str {
		&self.job_title
	}

	#[must_use]
	pub fn location(&self) -> &str {
		&self.location
	}

	/// The free-text query sent upstream, e.g. `Software Engineer jobs in Raleigh, NC`.
	#[must_use]
	pub fn query_string(&self) -> String {
		format!("{} jobs in {}", self.job_title, self.location)
	}
}

impl fmt::Display for SearchQuery {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.query_string())
	}
}
