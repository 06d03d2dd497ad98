use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::tui::theme::Theme;
use crate::types::SearchUiState;

pub const SEARCHING_LABEL: &str = "Searching for jobs...";

/// Render the results area for every state except `Success`.
///
/// Returns `false` for `Success` so the caller draws the cards instead.
pub fn render_status(
	frame: &mut Frame,
	area: Rect,
	state: &SearchUiState,
	throbber_state: &ThrobberState,
	theme: &Theme,
) -> bool {
	match state {
		SearchUiState::Idle => true,
		SearchUiState::Success(_) => false,
		SearchUiState::Loading => {
			let spinner = Throbber::default()
				.style(theme.empty_style())
				.throbber_style(theme.prompt_style());
			let line = Line::from(vec![
				spinner.to_symbol_span(throbber_state),
				Span::styled(SEARCHING_LABEL, theme.empty_style()),
			]);
			frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), padded(area));
			true
		}
		SearchUiState::Error(message) => {
			let banner = Paragraph::new(message.as_str())
				.style(theme.error_style())
				.wrap(Wrap { trim: true })
				.block(Block::bordered().border_style(theme.error_style()));
			let height = area.height.min(3);
			frame.render_widget(banner, Rect { height, ..area });
			true
		}
		SearchUiState::EmptyResult(message) => {
			frame.render_widget(
				Paragraph::new(message.as_str())
					.style(theme.empty_style())
					.alignment(Alignment::Center)
					.wrap(Wrap { trim: true }),
				padded(area),
			);
			true
		}
	}
}

fn padded(area: Rect) -> Rect {
	let top = area.height.min(1);
	Rect {
		y: area.y + top,
		height: area.height - top,
		..area
	}
}

/// One-line key hints, or a transient notice when present.
pub fn render_footer(frame: &mut Frame, area: Rect, notice: Option<&str>, results_focused: bool, theme: &Theme) {
	let line = match notice {
		Some(notice) => Line::from(Span::styled(format!(" {notice}"), theme.error_style())),
		None => {
			let hints = if results_focused {
				" ↑/↓ select · Enter/Space more/less · o open apply link · Esc back · Ctrl+C quit"
			} else {
				" Tab next field · Enter search · Ctrl+T theme · Esc quit"
			};
			Line::from(Span::styled(hints, theme.empty_style()))
		}
	};
	frame.render_widget(Paragraph::new(line), area);
}
