use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Block;

use super::App;
use super::state::Focus;
use crate::tui::components::{
	CardsContext, FORM_HEIGHT, FormContext, HEADER_HEIGHT, render_cards, render_footer, render_form,
	render_header, render_status,
};

impl<'a> App<'a> {
	pub fn draw(&mut self, frame: &mut Frame) {
		let theme = self.theme();
		let area = frame.area();
		frame.render_widget(Block::default().style(theme.background_style()), area);

		let [header_area, _, form_area, results_area, footer_area] = Layout::vertical([
			Constraint::Length(HEADER_HEIGHT),
			Constraint::Length(1),
			Constraint::Length(FORM_HEIGHT),
			Constraint::Min(1),
			Constraint::Length(1),
		])
		.areas(area);

		render_header(frame, header_area, self.theme_mode, &theme);

		let focused_field = match self.focus {
			Focus::Form(field) => Some(field),
			Focus::Results => None,
		};
		render_form(
			frame,
			form_area,
			FormContext {
				form: &mut self.form,
				focused: focused_field,
				loading: self.state.is_loading(),
				throbber_state: &self.throbber_state,
				theme: &theme,
			},
		);

		if !render_status(frame, results_area, &self.state, &self.throbber_state, &theme) {
			self.scroll_offset = render_cards(
				frame,
				results_area,
				CardsContext {
					jobs: self.state.jobs(),
					states: &self.cards,
					selected: self.selected,
					offset: self.scroll_offset,
					focused: self.focus == Focus::Results,
					theme: &theme,
				},
			);
		}

		render_footer(
			frame,
			footer_area,
			self.notice.as_deref(),
			self.focus == Focus::Results,
			&theme,
		);
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use ratatui::{Terminal, backend::TestBackend};

	use super::*;
	use crate::app::AppOptions;
	use crate::search::testing::{FakeSource, job};
	use crate::tui::ThemeMode;
	use crate::tui::test_support::buffer_to_string;
	use crate::types::{SEARCH_ERROR_MESSAGE, SearchUiState};

	fn screen(app: &mut App<'_>) -> String {
		let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
		terminal.draw(|frame| app.draw(frame)).unwrap();
		buffer_to_string(terminal.backend().buffer())
	}

	fn app() -> App<'static> {
		App::new(
			Arc::new(FakeSource::empty()),
			AppOptions {
				theme: ThemeMode::Dark,
				..AppOptions::default()
			},
		)
	}

	#[test]
	fn idle_screen_shows_header_and_form() {
		let mut app = app();
		let text = screen(&mut app);
		assert!(text.contains("Job Search"));
		assert!(text.contains("Search Jobs"));
		assert!(!text.contains("No jobs found"));
	}

	#[test]
	fn error_state_hides_cards() {
		let mut app = app();
		app.state = SearchUiState::error();
		let text = screen(&mut app);
		assert!(text.contains(SEARCH_ERROR_MESSAGE));
		assert!(!text.contains("Apply:"));
	}

	#[test]
	fn success_draws_cards_and_results_hints() {
		let mut app = app();
		app.state = SearchUiState::Success(vec![job("first", 2), job("second", 1)]);
		app.selected = Some(0);
		app.focus = Focus::Results;
		let text = screen(&mut app);
		assert!(text.contains("first engineer"));
		assert!(text.contains("second engineer"));
		assert!(text.contains("o open apply link"));
	}

	#[test]
	fn background_follows_theme() {
		let mut app = app();
		let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
		terminal.draw(|frame| app.draw(frame)).unwrap();
		let dark_bg = terminal.backend().buffer()[(0, 19)].bg;

		app.toggle_theme();
		terminal.draw(|frame| app.draw(frame)).unwrap();
		let light_bg = terminal.backend().buffer()[(0, 19)].bg;
		assert_ne!(dark_bg, light_bg);
	}
}
