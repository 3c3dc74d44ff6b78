//! HTTP adapter: request validation and JSON transport around the summarizer core.
mod api;
mod config;
mod routes;

pub use api::{ApiError, ErrorBody, SummaryRequest, SummaryResponse};
pub use config::{build_summarizer, Args, ConfigError, ServiceSettings};
pub use routes::{router, serve, ServiceState};
