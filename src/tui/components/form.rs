use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::form::{FormField, SearchForm};
use crate::tui::input::FieldStyle;
use crate::tui::theme::Theme;

pub const SUBMIT_LABEL: &str = "Search Jobs";
pub const LOADING_LABEL: &str = "Searching...";

/// Rows needed by [`render_form`].
pub const FORM_HEIGHT: u16 = 5;

/// Argument bundle for rendering the search form.
pub struct FormContext<'a, 'f> {
	pub form: &'a mut SearchForm<'f>,
	/// `None` while the result list has focus.
	pub focused: Option<FormField>,
	pub loading: bool,
	pub throbber_state: &'a ThrobberState,
	pub theme: &'a Theme,
}

/// Render both inputs side by side, their errors below and the submit line.
pub fn render_form(frame: &mut Frame, area: Rect, ctx: FormContext<'_, '_>) {
	let FormContext {
		form,
		focused,
		loading,
		throbber_state,
		theme,
	} = ctx;

	let [fields_area, errors_area, submit_area] = Layout::vertical([
		Constraint::Length(3),
		Constraint::Length(1),
		Constraint::Length(1),
	])
	.areas(area);
	let [title_area, location_area] =
		Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
			.areas(fields_area);
	let [title_error_area, location_error_area] =
		Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
			.areas(errors_area);

	let errors = form.errors();
	for (field, field_area, error_area) in [
		(FormField::JobTitle, title_area, title_error_area),
		(FormField::Location, location_area, location_error_area),
	] {
		let is_focused = focused == Some(field);
		let error = errors.for_field(field);
		let border = match (error, is_focused) {
			(Some(_), _) => theme.error_style(),
			(None, true) => theme.prompt_style(),
			(None, false) => theme.empty_style(),
		};
		let block = Block::bordered()
			.border_style(border)
			.title(Span::styled(format!(" {} ", field.label()), border));
		let style = FieldStyle {
			text: theme.text_style(),
			placeholder: theme.empty_style(),
			focused: is_focused,
		};
		form.field_mut(field).render(frame, field_area, block, style);

		if let Some(message) = error {
			frame.render_widget(
				Paragraph::new(format!(" {message}")).style(theme.error_style()),
				error_area,
			);
		}
	}

	frame.render_widget(Paragraph::new(submit_line(loading, throbber_state, theme)), submit_area);
}

fn submit_line(loading: bool, throbber_state: &ThrobberState, theme: &Theme) -> Line<'static> {
	if loading {
		let spinner = Throbber::default()
			.style(theme.empty_style())
			.throbber_style(theme.prompt_style());
		Line::from(vec![
			Span::raw(" "),
			spinner.to_symbol_span(throbber_state),
			Span::styled(LOADING_LABEL, theme.empty_style()),
		])
	} else {
		Line::from(vec![
			Span::styled(format!(" [ {SUBMIT_LABEL} ] "), theme.header_style()),
			Span::styled("  Enter to search", theme.empty_style()),
		])
	}
}
