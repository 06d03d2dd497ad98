mod builtins;
mod mode;
mod types;

pub use builtins::{DARK, LIGHT};
pub use mode::{ThemeMode, UnknownThemeMode};
pub use types::Theme;

impl Default for Theme {
	fn default() -> Self {
		LIGHT
	}
}
