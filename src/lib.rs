//! Core crate exports for the `jobsearch` terminal front end.
//!
//! The search form, the request orchestrator and the result renderer live in
//! separate modules; the root re-exports the shared data types so embedders
//! and the binary can drive a search without digging through the hierarchy.

pub mod app;
pub mod app_dirs;
pub mod form;
pub mod launcher;
pub mod logging;
pub mod search;
pub mod tui;
pub mod types;

pub use app::{App, AppOptions, run};
pub use form::{FieldErrors, FormField, SearchForm};
pub use search::{JSearchClient, JobSource, SearchError, SearchRuntime};
pub use types::{JobRecord, SearchQuery, SearchUiState};
