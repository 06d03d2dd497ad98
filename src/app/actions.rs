use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::state::Focus;
use crate::form::FormField;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
	Continue,
	Quit,
}

impl<'a> App<'a> {
	pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Char('c') if ctrl => return KeyOutcome::Quit,
			KeyCode::Char('t') if ctrl => {
				self.toggle_theme();
				return KeyOutcome::Continue;
			}
			_ => {}
		}

		self.notice = None;
		match self.focus {
			Focus::Form(field) => self.handle_form_key(field, key),
			Focus::Results => self.handle_results_key(key),
		}
	}

	fn handle_form_key(&mut self, field: FormField, key: KeyEvent) -> KeyOutcome {
		match key.code {
			KeyCode::Esc => return KeyOutcome::Quit,
			KeyCode::Enter => self.submit_search(),
			KeyCode::Tab | KeyCode::Down => self.focus_next(),
			KeyCode::BackTab | KeyCode::Up => self.focus_previous(),
			_ => {
				self.form.set_focus(field);
				self.form.input(key);
			}
		}
		KeyOutcome::Continue
	}

	fn handle_results_key(&mut self, key: KeyEvent) -> KeyOutcome {
		match key.code {
			KeyCode::Esc => self.focus_form(self.form.focus()),
			KeyCode::Tab => self.focus_next(),
			KeyCode::BackTab => self.focus_previous(),
			KeyCode::Up | KeyCode::Char('k') => self.move_selection_up(),
			KeyCode::Down | KeyCode::Char('j') => self.move_selection_down(),
			KeyCode::Home => self.select_index(0),
			KeyCode::End => self.select_index(self.jobs().len().saturating_sub(1)),
			KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected_description(),
			KeyCode::Char('o') => self.open_selected_link(),
			_ => {}
		}
		KeyOutcome::Continue
	}

	/// Tab order: job title, location, then the results when any are shown.
	pub(crate) fn focus_next(&mut self) {
		if self.focus == Focus::Results {
			self.focus_form(FormField::JobTitle);
		} else if self.form.focus_next() {
			self.focus = Focus::Form(self.form.focus());
		} else if self.has_cards() {
			self.focus = Focus::Results;
		} else {
			self.focus_form(FormField::JobTitle);
		}
	}

	pub(crate) fn focus_previous(&mut self) {
		if self.focus == Focus::Results {
			self.focus_form(FormField::Location);
		} else if self.form.focus_previous() {
			self.focus = Focus::Form(self.form.focus());
		} else if self.has_cards() {
			self.focus = Focus::Results;
		} else {
			self.focus_form(FormField::Location);
		}
	}

	fn has_cards(&self) -> bool {
		!self.jobs().is_empty()
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.selected
			&& selected > 0
		{
			self.selected = Some(selected - 1);
		}
	}

	fn move_selection_down(&mut self) {
		if let Some(selected) = self.selected
			&& selected + 1 < self.jobs().len()
		{
			self.selected = Some(selected + 1);
		}
	}

	fn select_index(&mut self, index: usize) {
		if self.has_cards() {
			self.selected = Some(index.min(self.jobs().len() - 1));
		}
	}

	fn toggle_selected_description(&mut self) {
		let Some(id) = self.selected_job().map(|job| job.id.clone()) else {
			return;
		};
		let expanded = self.cards.toggle(&id);
		tracing::debug!(id, expanded, "toggled description");
	}

	fn open_selected_link(&mut self) {
		let Some(link) = self.selected_job().map(|job| job.apply_link.clone()) else {
			return;
		};
		if link.is_empty() {
			self.notice = Some("This listing has no apply link.".to_string());
			return;
		}
		if let Err(err) = (self.opener)(&link) {
			tracing::warn!(error = %err, "failed to open apply link");
			self.notice = Some(format!("Could not open link: {err}"));
		}
	}
}
