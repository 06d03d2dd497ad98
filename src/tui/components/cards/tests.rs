use chrono::{Local, TimeZone};
use ratatui::{Terminal, backend::TestBackend};

use super::*;
use crate::search::testing::job;
use crate::tui::test_support::buffer_to_string;

fn long_description(chars: usize) -> String {
	"word ".repeat(chars / 5 + 1).chars().take(chars).collect()
}

fn draw(jobs: &[JobRecord], states: &CardStates, selected: Option<usize>, size: (u16, u16)) -> (String, usize) {
	let theme = Theme::default();
	let mut terminal = Terminal::new(TestBackend::new(size.0, size.1)).unwrap();
	let mut used = 0;
	terminal
		.draw(|frame| {
			used = render_cards(
				frame,
				frame.area(),
				CardsContext {
					jobs,
					states,
					selected,
					offset: 0,
					focused: true,
					theme: &theme,
				},
			);
		})
		.unwrap();
	(buffer_to_string(terminal.backend().buffer()), used)
}

#[test]
fn long_description_collapses_and_expands() {
	let text = long_description(350);

	let collapsed = truncate_description(&text, false);
	assert_eq!(collapsed.text.chars().count(), 200);
	assert_eq!(collapsed.affordance, Some(Affordance::More));

	let expanded = truncate_description(&text, true);
	assert_eq!(expanded.text.chars().count(), 350);
	assert_eq!(expanded.affordance, Some(Affordance::Less));

	let again = truncate_description(&text, false);
	assert_eq!(again, collapsed);
}

#[test]
fn short_description_has_no_control() {
	let text = long_description(200);
	let view = truncate_description(&text, false);
	assert_eq!(view.text, text);
	assert_eq!(view.affordance, None);
	assert_eq!(truncate_description("", true).affordance, None);
}

#[test]
fn truncation_counts_chars_not_bytes() {
	let text = "é".repeat(250);
	let view = truncate_description(&text, false);
	assert_eq!(view.text.chars().count(), 200);
}

#[test]
fn posted_date_uses_local_timezone() {
	let expected = Local
		.timestamp_opt(1_700_000_000, 0)
		.earliest()
		.unwrap()
		.format("%x")
		.to_string();
	assert_eq!(format_posted_date(1_700_000_000), expected);
	assert_eq!(format_posted_date(i64::MAX), "Unknown date");
}

#[test]
fn offset_follows_selection() {
	let heights = [5, 5, 5, 5];
	assert_eq!(visible_offset(&heights, Some(0), 0, 10), 0);
	assert_eq!(visible_offset(&heights, Some(3), 0, 10), 2);
	assert_eq!(visible_offset(&heights, Some(1), 3, 10), 1);
	assert_eq!(visible_offset(&heights, None, 9, 10), 3);
	assert_eq!(visible_offset(&[], None, 2, 10), 0);
}

#[test]
fn empty_list_shows_only_the_message() {
	let (screen, _) = draw(&[], &CardStates::default(), None, (60, 5));
	assert!(screen.contains(NO_JOBS_MESSAGE));
	assert!(!screen.contains("Apply"));
}

#[test]
fn cards_render_in_given_order() {
	let jobs = [job("newer", 200), job("older", 100)];
	let (screen, _) = draw(&jobs, &CardStates::default(), Some(0), (60, 30));
	let newer = screen.find("newer engineer").expect("first card");
	let older = screen.find("older engineer").expect("second card");
	assert!(newer < older);
	assert!(screen.contains("newer Corp"));
	assert!(screen.contains("Location: Raleigh, NC"));
	assert!(screen.contains("https://example.com/newer"));
	assert!(screen.contains(PLACEHOLDER_GLYPH));
}

#[test]
fn description_control_tracks_card_state() {
	let mut record = job("long", 1);
	record.description = long_description(350);
	let jobs = [record];
	let mut states = CardStates::default();

	let (collapsed, _) = draw(&jobs, &states, Some(0), (60, 30));
	assert!(collapsed.contains("more"));
	assert!(!collapsed.contains("less"));

	states.toggle("long");
	let (expanded, _) = draw(&jobs, &states, Some(0), (60, 30));
	assert!(expanded.contains("less"));
	assert!(!expanded.contains("more"));
}

#[test]
fn selected_card_is_scrolled_into_view() {
	let jobs: Vec<JobRecord> = (0..6).map(|i| job(&format!("card{i}"), 10 - i)).collect();
	let (screen, offset) = draw(&jobs, &CardStates::default(), Some(5), (60, 12));
	assert!(offset > 0);
	assert!(screen.contains("card5 engineer"));
	assert!(!screen.contains("card0 engineer"));
}
