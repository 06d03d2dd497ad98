mod actions;
mod cards;
mod render;
mod runtime;
mod search;
mod state;

pub use actions::KeyOutcome;
pub use cards::CardStates;
pub use runtime::run;
pub use state::{App, AppOptions, Focus};
