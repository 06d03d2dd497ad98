//! Search orchestrator: request building, the upstream client, response
//! interpretation and the background worker that keeps network calls off the
//! UI thread.

mod client;
mod commands;
mod error;
pub mod request;
pub mod response;
mod runtime;
mod worker;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{ApiKey, JSearchClient, JobSource};
pub use commands::SearchResult;
pub use error::SearchError;
pub use request::{DEFAULT_ENDPOINT, build_url};
pub use response::{JobSearchResponse, interpret};
pub use runtime::SearchRuntime;
pub use worker::{run_once, spawn};
pub(crate) use worker::is_request_thread;
