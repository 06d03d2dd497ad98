use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use tui_textarea::TextArea;

/// Single-line text input backed by `tui-textarea`.
pub struct FieldInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> FieldInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>, placeholder: &str) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_placeholder_text(placeholder);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(tui_textarea::CursorMove::End);
		Self { textarea }
	}

	/// The current value of the field.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key event to the field. Returns `true` when the text changed.
	///
	/// Line breaks are never inserted; submission is handled by the caller.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if inserts_newline(&key) {
			return false;
		}
		self.textarea.input(key)
	}

	/// Render the field inside `block`, showing the cursor only when focused.
	pub fn render(&mut self, frame: &mut Frame, area: Rect, block: Block<'a>, style: FieldStyle) {
		self.textarea.set_block(block);
		self.textarea.set_style(style.text);
		self.textarea.set_placeholder_style(style.placeholder);
		let cursor = if style.focused {
			style.text.add_modifier(Modifier::REVERSED)
		} else {
			style.text
		};
		self.textarea.set_cursor_style(cursor);
		frame.render_widget(&self.textarea, area);
	}
}

/// Styles applied to a [`FieldInput`] for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FieldStyle {
	pub text: Style,
	pub placeholder: Style,
	pub focused: bool,
}

fn inserts_newline(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn press(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_updates_text() {
		let mut input = FieldInput::new("", "placeholder");
		assert!(input.input(press(KeyCode::Char('r'))));
		assert!(input.input(press(KeyCode::Char('n'))));
		assert_eq!(input.text(), "rn");
	}

	#[test]
	fn initial_value_is_editable_at_the_end() {
		let mut input = FieldInput::new("Nurs", "placeholder");
		input.input(press(KeyCode::Char('e')));
		assert_eq!(input.text(), "Nurse");
	}

	#[test]
	fn enter_never_adds_lines() {
		let mut input = FieldInput::new("Nurse", "placeholder");
		assert!(!input.input(press(KeyCode::Enter)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "Nurse");
	}
}
