use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::theme::{Theme, ThemeMode};

pub const TITLE: &str = "Job Search";
pub const TAGLINE: &str = "Find your next opportunity - Search thousands of jobs";
pub const HEADER_HEIGHT: u16 = 2;

pub fn render_header(frame: &mut Frame, area: Rect, mode: ThemeMode, theme: &Theme) {
	let indicator = match mode {
		ThemeMode::Light => "☾ dark (Ctrl+T) ",
		ThemeMode::Dark => "☀ light (Ctrl+T) ",
	};

	let top = Rect { height: area.height.min(1), ..area };
	let indicator_width = u16::try_from(indicator.chars().count()).unwrap_or(u16::MAX);
	let [title_area, indicator_area] =
		Layout::horizontal([Constraint::Min(1), Constraint::Length(indicator_width)]).areas(top);

	let title = Line::from(Span::styled(format!(" {TITLE} "), theme.title_style()));
	frame.render_widget(Paragraph::new(title).style(theme.header_style()), title_area);
	frame.render_widget(
		Paragraph::new(indicator)
			.style(theme.header_style())
			.alignment(Alignment::Right),
		indicator_area,
	);

	if area.height > 1 {
		let tagline = Rect {
			y: area.y + 1,
			height: 1,
			..area
		};
		frame.render_widget(
			Paragraph::new(format!(" {TAGLINE}")).style(theme.empty_style()),
			tagline,
		);
	}
}
