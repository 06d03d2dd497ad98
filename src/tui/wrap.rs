use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Soft-wrap `text` to `width` columns, honouring embedded newlines.
#[must_use]
pub fn wrap_text(text: &str, style: Style, width: usize) -> Vec<Line<'static>> {
	text.lines()
		.flat_map(|paragraph| wrap_spans(vec![Span::styled(paragraph.to_string(), style)], width))
		.collect()
}

/// Soft-wrap a single line made of styled spans at word boundaries.
///
/// Words wider than `width` are split. A glyph wider than `width` gets a line
/// of its own. Continuation lines drop the leading whitespace left over from
/// the break.
#[must_use]
pub fn wrap_spans(spans: Vec<Span<'static>>, width: usize) -> Vec<Line<'static>> {
	if width == 0 {
		return Vec::new();
	}

	let mut body = spans;
	if body.iter().all(|span| span.content.is_empty()) {
		return vec![Line::default()];
	}

	let mut wrapped = Vec::new();
	while !body.is_empty() {
		let (mut chunk, mut rest) = take_spans_within_width(&body, width);
		if chunk.is_empty() {
			(chunk, rest) = take_first_grapheme(body);
			if chunk.is_empty() {
				break;
			}
		}
		wrapped.push(Line::from(chunk));
		body = trim_leading_whitespace(rest);
	}

	wrapped
}

fn take_spans_within_width(
	spans: &[Span<'static>],
	max_width: usize,
) -> (Vec<Span<'static>>, Vec<Span<'static>>) {
	let mut taken: Vec<(String, Style)> = Vec::new();
	let mut used = 0;
	let mut last_break: Option<usize> = None;
	let mut prev_was_break = false;

	for (span_index, span) in spans.iter().enumerate() {
		let mut parts = span.content.split_word_bounds().peekable();

		while let Some(part) = parts.next() {
			let part_width = part.width();
			let is_break = part.chars().all(|ch| !is_word_char(ch));

			if used + part_width > max_width {
				let break_at = if is_break || prev_was_break {
					Some(taken.len())
				} else {
					last_break
				};

				if let Some(index) = break_at.filter(|index| used > 0 && *index > 0) {
					let (head, tail) = taken.split_at(index);
					let mut rest: Vec<(String, Style)> = tail.to_vec();
					rest.push((part.to_string(), span.style));
					rest.extend(parts.map(|remaining| (remaining.to_string(), span.style)));
					let mut rest = coalesce(&rest);
					rest.extend_from_slice(&spans[span_index + 1..]);
					return (coalesce(head), rest);
				}

				let (left, right) = split_text_at_width(part, max_width.saturating_sub(used));
				if !left.is_empty() {
					taken.push((left, span.style));
				}
				let mut rest: Vec<(String, Style)> = Vec::new();
				if !right.is_empty() {
					rest.push((right, span.style));
				}
				rest.extend(parts.map(|remaining| (remaining.to_string(), span.style)));
				let mut rest = coalesce(&rest);
				rest.extend_from_slice(&spans[span_index + 1..]);
				return (coalesce(&taken), rest);
			}

			taken.push((part.to_string(), span.style));
			used += part_width;
			if is_break || prev_was_break {
				last_break = Some(taken.len());
			}
			prev_was_break = is_break;
		}
	}

	(coalesce(&taken), Vec::new())
}

/// Split off the first grapheme cluster so it can stand on a line by itself.
fn take_first_grapheme(spans: Vec<Span<'static>>) -> (Vec<Span<'static>>, Vec<Span<'static>>) {
	let mut spans = spans.into_iter().skip_while(|span| span.content.is_empty());
	let Some(first) = spans.next() else {
		return (Vec::new(), Vec::new());
	};

	let content = first.content.as_ref();
	let split = content.graphemes(true).next().map_or(content.len(), str::len);
	let (glyph, tail) = content.split_at(split);

	let head = vec![Span::styled(glyph.to_string(), first.style)];
	let mut rest = Vec::new();
	if !tail.is_empty() {
		rest.push(Span::styled(tail.to_string(), first.style));
	}
	rest.extend(spans);
	(head, rest)
}

fn split_text_at_width(text: &str, target_width: usize) -> (String, String) {
	let mut width = 0;
	let mut split_byte = 0;

	for (idx, ch) in text.char_indices() {
		let ch_width = ch.width().unwrap_or(0);
		if width + ch_width > target_width {
			break;
		}
		width += ch_width;
		split_byte = idx + ch.len_utf8();
	}

	let (left, right) = text.split_at(split_byte);
	(left.to_string(), right.to_string())
}

fn trim_leading_whitespace(mut spans: Vec<Span<'static>>) -> Vec<Span<'static>> {
	while let Some(first) = spans.first_mut() {
		let trimmed = first.content.trim_start();
		if trimmed.is_empty() {
			spans.remove(0);
			continue;
		}
		if trimmed.len() != first.content.len() {
			first.content = trimmed.to_string().into();
		}
		break;
	}
	spans
}

fn coalesce(segments: &[(String, Style)]) -> Vec<Span<'static>> {
	let mut coalesced: Vec<Span<'static>> = Vec::new();
	let mut iter = segments.iter().peekable();

	while let Some((text, style)) = iter.next() {
		let mut merged = text.clone();
		while let Some((next_text, next_style)) = iter.peek() {
			if next_style != style {
				break;
			}
			merged.push_str(next_text);
			iter.next();
		}
		if !merged.is_empty() {
			coalesced.push(Span::styled(merged, *style));
		}
	}

	coalesced
}

fn is_word_char(ch: char) -> bool {
	ch.is_alphanumeric() || ch == '_'
}
