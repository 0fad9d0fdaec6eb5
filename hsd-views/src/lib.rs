//! Chart view loaders and the dashboard initializer.
//!
//! A [`loader::ViewLoader`] owns one chart end to end: fetch, parse,
//! project, render, and on any failure log the cause and swap the chart
//! for a fixed error message. The [`dashboard::Dashboard`] starts all five
//! loaders together and waits for every one of them to settle.
//!
//! Drawing is delegated to a [`render::Renderer`] so the same loaders drive
//! Plotly in the browser, JSON snapshots on the command line, and a
//! recording fake in tests.

pub mod dashboard;
pub mod loader;
pub mod render;
pub mod view;

pub use dashboard::{Dashboard, DashboardReport};
pub use loader::{LoadOutcome, ViewLoader};
pub use render::{error_markup, Renderer, ERROR_MESSAGE};
pub use view::ChartView;

#[cfg(test)]
pub(crate) mod testing;
