use std::fmt;

/// Per-field validation messages for the search form.
///
/// Each field is checked independently; an error on one never masks the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
	pub job_title: Option<&'static str>,
	pub location: Option<&'static str>,
}

impl FieldErrors {
	pub const JOB_TITLE_REQUIRED: &'static str = "Job title is required";
	pub const LOCATION_REQUIRED: &'static str = "Location is required";

	/// Check the raw (unsanitized) field values for emptiness.
	#[must_use]
	pub fn validate(job_title: &str, location: &str) -> Self {
		Self {
			job_title: job_title.is_empty().then_some(Self::JOB_TITLE_REQUIRED),
			location: location.is_empty().then_some(Self::LOCATION_REQUIRED),
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.job_title.is_none() && self.location.is_none()
	}

	/// Lookup the message for a specific field.
	#[must_use]
	pub fn for_field(&self, field: FormField) -> Option<&'static str> {
		match field {
			FormField::JobTitle => self.job_title,
			FormField::Location => self.location,
		}
	}
}

impl fmt::Display for FieldErrors {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let messages: Vec<&str> = [self.job_title, self.location]
			.into_iter()
			.flatten()
			.collect();
		f.write_str(&messages.join("; "))
	}
}

impl std::error::Error for FieldErrors {}

/// The two inputs of the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
	JobTitle,
	Location,
}

impl FormField {
	#[must_use]
	pub fn placeholder(self) -> &'static str {
		match self {
			Self::JobTitle => "Job Title (e.g. Software Engineer)",
			Self::Location => "Location (e.g. Raleigh, NC)",
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::JobTitle => "Job Title",
			Self::Location => "Location",
		}
	}
}
