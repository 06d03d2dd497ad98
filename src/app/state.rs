use std::sync::Arc;

use throbber_widgets_tui::ThrobberState;

use super::CardStates;
use crate::form::{FormField, SearchForm};
use crate::launcher::{self, Opener};
use crate::search::{self, JobSource, SearchRuntime};
use crate::tui::{Theme, ThemeMode};
use crate::types::{JobRecord, SearchUiState};

/// Startup values for the interactive UI.
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
	pub theme: ThemeMode,
	pub job_title: String,
	pub location: String,
}

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
	Form(FormField),
	Results,
}

pub struct App<'a> {
	pub form: SearchForm<'a>,
	pub state: SearchUiState,
	pub theme_mode: ThemeMode,
	pub(crate) cards: CardStates,
	pub(crate) focus: Focus,
	pub(crate) selected: Option<usize>,
	pub(crate) scroll_offset: usize,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) notice: Option<String>,
	pub(crate) opener: Opener,
	pub(crate) search: SearchRuntime,
}

impl<'a> App<'a> {
	pub fn new(source: Arc<dyn JobSource>, options: AppOptions) -> Self {
		let AppOptions {
			theme,
			job_title,
			location,
		} = options;
		Self {
			form: SearchForm::new(job_title, location),
			state: SearchUiState::Idle,
			theme_mode: theme,
			cards: CardStates::default(),
			focus: Focus::Form(FormField::JobTitle),
			selected: None,
			scroll_offset: 0,
			throbber_state: ThrobberState::default(),
			notice: None,
			opener: launcher::open_in_browser,
			search: search::spawn(source),
		}
	}

	#[must_use]
	pub fn theme(&self) -> Theme {
		self.theme_mode.theme()
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	#[must_use]
	pub fn jobs(&self) -> &[JobRecord] {
		self.state.jobs()
	}

	#[must_use]
	pub fn selected_job(&self) -> Option<&JobRecord> {
		self.selected.and_then(|index| self.jobs().get(index))
	}

	#[must_use]
	pub fn is_expanded(&self, id: &str) -> bool {
		self.cards.is_expanded(id)
	}

	pub fn toggle_theme(&mut self) {
		self.theme_mode = self.theme_mode.toggled();
		tracing::debug!(theme = %self.theme_mode, "theme toggled");
	}

	pub(crate) fn focus_form(&mut self, field: FormField) {
		self.form.set_focus(field);
		self.focus = Focus::Form(field);
	}
}
