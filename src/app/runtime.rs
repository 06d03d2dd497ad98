use std::panic;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::actions::KeyOutcome;
use super::{App, AppOptions};
use crate::search::{JobSource, is_request_thread};

/// Construct an [`App`] over `source` and run it until the user quits.
pub fn run(source: Arc<dyn JobSource>, options: AppOptions) -> Result<()> {
	let mut app = App::new(source, options);
	app.run()
}

/// Wrap the hook installed by `ratatui::init` so panics on request threads,
/// which the worker turns into a search error, only reach the log.
fn install_panic_hook() {
	let next = panic::take_hook();
	panic::set_hook(Box::new(move |info| {
		if is_request_thread() {
			tracing::error!(panic = %info, "search request panicked");
			return;
		}
		next(info);
	}));
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user exits.
	pub fn run(&mut self) -> Result<()> {
		let mut terminal = ratatui::init();
		install_panic_hook();
		let result = self.event_loop(&mut terminal);
		ratatui::restore();
		result
	}

	fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
		terminal.clear()?;

		loop {
			self.pump_search_results();
			if self.state.is_loading() {
				self.throbber_state.calc_next();
			}
			terminal.draw(|frame| self.draw(frame))?;

			if event::poll(Duration::from_millis(50))? {
				match event::read()? {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						if self.handle_key(key) == KeyOutcome::Quit {
							return Ok(());
						}
					}
					_ => {}
				}
			}
		}
	}
}
