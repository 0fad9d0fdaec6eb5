//! Endpoint catalogue, typed payload records and fetch plumbing for the
//! health survey statistics API.
//!
//! Every chart on the dashboard consumes exactly one endpoint. This crate
//! knows where those endpoints live ([`config::ApiConfig`],
//! [`endpoint::Endpoint`]), what they return ([`payload`]), and how a body
//! is obtained ([`fetch::Fetcher`]). Shape violations are turned into a
//! [`error::LoadFailure`] at the parse boundary instead of leaking into the
//! charts.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod fetch;
#[cfg(feature = "api")]
pub mod http;
pub mod payload;

pub use config::ApiConfig;
pub use endpoint::Endpoint;
pub use error::{LoadFailure, LoadResult};
pub use fetch::{fetch_payload, Fetcher};
