use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub header: Style,
	pub row_highlight: Style,
	pub prompt: Style,
	pub empty: Style,
	pub error: Style,
	pub accent: Style,
	pub text: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	/// Border style of the selected card.
	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	/// Muted text: placeholders, hints and secondary card lines.
	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn error_style(&self) -> Style {
		self.error
	}

	/// Links and the expand/collapse affordance.
	#[must_use]
	pub fn accent_style(&self) -> Style {
		self.accent
	}

	#[must_use]
	pub fn text_style(&self) -> Style {
		self.text
	}

	#[must_use]
	pub fn header_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn header_bg(&self) -> Color {
		self.header.bg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn title_style(&self) -> Style {
		Style::new()
			.fg(self.header_fg())
			.bg(self.header_bg())
			.add_modifier(Modifier::BOLD)
	}

	/// Base style painted across the whole frame.
	#[must_use]
	pub fn background_style(&self) -> Style {
		self.text
	}
}
