//! Search form: two text fields, inline validation and input sanitization.
//!
//! The form keeps its field values across submissions so the user can fix a
//! mistake and resubmit; the error set is recomputed on every submission.

mod sanitize;
mod validation;

pub use sanitize::sanitize;
pub use validation::{FieldErrors, FormField};

use ratatui::crossterm::event::KeyEvent;

use crate::tui::input::FieldInput;
use crate::types::SearchQuery;

/// Interactive state for the job title and location inputs.
pub struct SearchForm<'a> {
	job_title: FieldInput<'a>,
	location: FieldInput<'a>,
	focus: FormField,
	errors: FieldErrors,
}

impl<'a> SearchForm<'a> {
	#[must_use]
	pub fn new(job_title: impl Into<String>, location: impl Into<String>) -> Self {
		Self {
			job_title: FieldInput::new(job_title, FormField::JobTitle.placeholder()),
			location: FieldInput::new(location, FormField::Location.placeholder()),
			focus: FormField::JobTitle,
			errors: FieldErrors::default(),
		}
	}

	/// Validate and sanitize the current values.
	///
	/// Returns the query to dispatch, or `None` when a field is empty. The
	/// error set is replaced either way.
	pub fn submit(&mut self) -> Option<SearchQuery> {
		match SearchQuery::from_raw(self.job_title.text(), self.location.text()) {
			Ok(query) => {
				self.errors = FieldErrors::default();
				Some(query)
			}
			Err(errors) => {
				self.errors = errors;
				None
			}
		}
	}

	/// Route a key press to the focused field.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		self.field_mut(self.focus).input(key)
	}

	#[must_use]
	pub fn focus(&self) -> FormField {
		self.focus
	}

	pub fn set_focus(&mut self, field: FormField) {
		self.focus = field;
	}

	/// Move focus to the next field. Returns `false` when already on the last one.
	pub fn focus_next(&mut self) -> bool {
		match self.focus {
			FormField::JobTitle => {
				self.focus = FormField::Location;
				true
			}
			FormField::Location => false,
		}
	}

	/// Move focus to the previous field. Returns `false` when already on the first one.
	pub fn focus_previous(&mut self) -> bool {
		match self.focus {
			FormField::Location => {
				self.focus = FormField::JobTitle;
				true
			}
			FormField::JobTitle => false,
		}
	}

	#[must_use]
	pub fn errors(&self) -> FieldErrors {
		self.errors
	}

	#[must_use]
	pub fn value(&self, field: FormField) -> &str {
		match field {
			FormField::JobTitle => self.job_title.text(),
			FormField::Location => self.location.text(),
		}
	}

	pub(crate) fn field_mut(&mut self, field: FormField) -> &mut FieldInput<'a> {
		match field {
			FormField::JobTitle => &mut self.job_title,
			FormField::Location => &mut self.location,
		}
	}
}

impl Default for SearchForm<'_> {
	fn default() -> Self {
		Self::new("", "")
	}
}
