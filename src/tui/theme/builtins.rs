use ratatui::style::{Color, Modifier, Style};

use super::Theme;

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.fg(Color::Rgb(37, 99, 235))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	error: Style::new().fg(Color::Rgb(185, 28, 28)),
	accent: Style::new()
		.fg(Color::Rgb(37, 99, 235))
		.add_modifier(Modifier::UNDERLINED),
	text: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(248, 250, 252)),
};

pub const DARK: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.fg(Color::Rgb(250, 204, 21))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	error: Style::new().fg(Color::LightRed),
	accent: Style::new()
		.fg(Color::LightBlue)
		.add_modifier(Modifier::UNDERLINED),
	text: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(30, 41, 59)),
};

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn selected_card_border_stands_out_from_body_text() {
		for theme in [LIGHT, DARK] {
			assert_ne!(theme.row_highlight_style().fg, theme.text_style().fg);
			assert!(theme.row_highlight_style().add_modifier.contains(Modifier::BOLD));
		}
	}
}
