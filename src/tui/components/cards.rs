use chrono::{Local, TimeZone};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::app::CardStates;
use crate::tui::theme::Theme;
use crate::tui::wrap::{wrap_spans, wrap_text};
use crate::types::JobRecord;

/// Characters shown before a description is collapsed.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 200;
pub const NO_JOBS_MESSAGE: &str = "No jobs found. Try adjusting your search criteria.";
const UNKNOWN_DATE: &str = "Unknown date";
const LOGO_GLYPH: &str = "■";
const PLACEHOLDER_GLYPH: &str = "□";

/// Control shown after a long description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
	More,
	Less,
}

impl Affordance {
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::More => "... more",
			Self::Less => " less",
		}
	}
}

/// The visible part of a description plus its expand/collapse control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptionView<'a> {
	pub text: &'a str,
	pub affordance: Option<Affordance>,
}

/// Cut `text` to [`DESCRIPTION_PREVIEW_CHARS`] unless `expanded`.
///
/// Counting is in Unicode scalar values, so the cut never splits a char.
#[must_use]
pub fn truncate_description(text: &str, expanded: bool) -> DescriptionView<'_> {
	let Some((cut, _)) = text.char_indices().nth(DESCRIPTION_PREVIEW_CHARS) else {
		return DescriptionView {
			text,
			affordance: None,
		};
	};

	if expanded {
		DescriptionView {
			text,
			affordance: Some(Affordance::Less),
		}
	} else {
		DescriptionView {
			text: &text[..cut],
			affordance: Some(Affordance::More),
		}
	}
}

/// Render an epoch timestamp as a date in the local timezone.
#[must_use]
pub fn format_posted_date(epoch_seconds: i64) -> String {
	Local
		.timestamp_opt(epoch_seconds, 0)
		.earliest()
		.map(|posted| posted.format("%x").to_string())
		.unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

/// Argument bundle for rendering the result cards.
pub struct CardsContext<'a> {
	pub jobs: &'a [JobRecord],
	pub states: &'a CardStates,
	pub selected: Option<usize>,
	/// Index of the first card drawn in the previous frame.
	pub offset: usize,
	pub focused: bool,
	pub theme: &'a Theme,
}

/// Render the cards and return the offset actually used, which keeps the
/// selected card in view.
pub fn render_cards(frame: &mut Frame, area: Rect, ctx: CardsContext<'_>) -> usize {
	let CardsContext {
		jobs,
		states,
		selected,
		offset,
		focused,
		theme,
	} = ctx;

	if area.width == 0 || area.height == 0 {
		return offset;
	}

	if jobs.is_empty() {
		let message = Paragraph::new(NO_JOBS_MESSAGE)
			.style(theme.empty_style())
			.alignment(Alignment::Center);
		frame.render_widget(message, area);
		return 0;
	}

	let inner_width = usize::from(area.width.saturating_sub(2));
	let bodies: Vec<Vec<Line<'static>>> = jobs
		.iter()
		.enumerate()
		.map(|(index, job)| {
			card_lines(
				job,
				states.is_expanded(&job.id),
				selected == Some(index),
				theme,
				inner_width,
			)
		})
		.collect();
	let heights: Vec<u16> = bodies
		.iter()
		.map(|lines| u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2))
		.collect();
	let offset = visible_offset(&heights, selected, offset, area.height);

	let mut y = area.top();
	for (index, (job, lines)) in jobs.iter().zip(bodies).enumerate().skip(offset) {
		if y >= area.bottom() {
			break;
		}
		let height = heights[index].min(area.bottom() - y);
		let rect = Rect {
			y,
			height,
			..area
		};

		let is_selected = selected == Some(index);
		let border = if is_selected && focused {
			theme.row_highlight_style()
		} else if is_selected {
			theme.prompt_style()
		} else {
			theme.empty_style()
		};
		let title = Line::from(Span::styled(
			format!(" {} ", job.title),
			theme.text_style().add_modifier(Modifier::BOLD),
		));
		let block = Block::bordered().border_style(border).title(title);
		frame.render_widget(Paragraph::new(lines).block(block), rect);

		y = y.saturating_add(height);
	}

	offset
}

fn card_lines(
	job: &JobRecord,
	expanded: bool,
	selected: bool,
	theme: &Theme,
	width: usize,
) -> Vec<Line<'static>> {
	let muted = theme.empty_style();
	let mut lines = Vec::new();

	let marker = if job.has_logo() {
		Span::styled(format!("{LOGO_GLYPH} "), theme.prompt_style())
	} else {
		Span::styled(format!("{PLACEHOLDER_GLYPH} "), muted)
	};
	lines.extend(wrap_spans(
		vec![marker, Span::styled(job.employer_name.clone(), muted)],
		width,
	));
	lines.extend(wrap_text(&format!("Location: {}", job.location), muted, width));
	lines.extend(wrap_text(
		&format!("Posted: {}", format_posted_date(job.posted_at)),
		muted,
		width,
	));
	lines.push(Line::default());

	lines.extend(description_lines(&job.description, expanded, theme, width));

	let mut apply = vec![
		Span::styled("Apply: ", theme.text_style()),
		Span::styled(job.apply_link.clone(), theme.accent_style()),
	];
	if selected {
		apply.push(Span::styled("  (o to open)", muted));
	}
	lines.push(Line::default());
	lines.extend(wrap_spans(apply, width));

	lines
}

fn description_lines(text: &str, expanded: bool, theme: &Theme, width: usize) -> Vec<Line<'static>> {
	let view = truncate_description(text, expanded);
	let style: Style = theme.text_style();
	let mut paragraphs: Vec<Vec<Span<'static>>> = view
		.text
		.lines()
		.map(|paragraph| vec![Span::styled(paragraph.to_string(), style)])
		.collect();

	if let Some(affordance) = view.affordance {
		let control = Span::styled(affordance.label(), theme.accent_style());
		match paragraphs.last_mut() {
			Some(last) => last.push(control),
			None => paragraphs.push(vec![control]),
		}
	}

	paragraphs
		.into_iter()
		.flat_map(|paragraph| wrap_spans(paragraph, width))
		.collect()
}

/// First card index to draw so that `selected` fits in `viewport` rows.
fn visible_offset(heights: &[u16], selected: Option<usize>, offset: usize, viewport: u16) -> usize {
	let last = heights.len().saturating_sub(1);
	let Some(selected) = selected.map(|index| index.min(last)) else {
		return offset.min(last);
	};

	let mut offset = offset.min(selected);
	while offset < selected {
		let used: u32 = heights[offset..=selected].iter().map(|h| u32::from(*h)).sum();
		if used <= u32::from(viewport) {
			break;
		}
		offset += 1;
	}
	offset
}

#[cfg(test)]
mod tests;
