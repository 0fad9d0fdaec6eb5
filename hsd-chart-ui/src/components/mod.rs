//! Reusable Dioxus RSX components for the health survey dashboard.

mod chart_container;
mod chart_header;
mod chart_panel;
mod dashboard_summary;
mod error_display;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use chart_panel::ChartPanel;
pub use dashboard_summary::DashboardSummary;
pub use error_display::ErrorDisplay;
