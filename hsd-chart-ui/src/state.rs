//! Application state managed via Dioxus context.
//!
//! `DashboardState` bundles the reactive signals into a single struct
//! provided via `use_context_provider`. Child components retrieve it with
//! `use_context::<DashboardState>()`.

use dioxus::prelude::*;
use hsd_views::{ChartView, DashboardReport, LoadOutcome};
use std::collections::BTreeMap;

/// Where a single chart's load currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    Loading,
    Rendered,
    Failed,
}

impl ViewStatus {
    /// Class added to the chart wrapper, e.g. `chart-failed`.
    pub fn css_class(&self) -> &'static str {
        match self {
            ViewStatus::Loading => "chart-loading",
            ViewStatus::Rendered => "chart-rendered",
            ViewStatus::Failed => "chart-failed",
        }
    }
}

impl From<&LoadOutcome> for ViewStatus {
    fn from(outcome: &LoadOutcome) -> Self {
        if outcome.is_rendered() {
            ViewStatus::Rendered
        } else {
            ViewStatus::Failed
        }
    }
}

/// Shared state for the dashboard app.
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Per-chart status, updated as each loader settles
    pub statuses: Signal<BTreeMap<ChartView, ViewStatus>>,
    /// Set once every loader has settled
    pub report: Signal<Option<DashboardReport>>,
}

impl DashboardState {
    /// Create a new DashboardState with every chart loading.
    pub fn new() -> Self {
        Self {
            statuses: Signal::new(
                ChartView::ALL
                    .iter()
                    .map(|view| (*view, ViewStatus::Loading))
                    .collect(),
            ),
            report: Signal::new(None),
        }
    }

    pub fn status(&self, view: ChartView) -> ViewStatus {
        self.statuses
            .read()
            .get(&view)
            .copied()
            .unwrap_or(ViewStatus::Loading)
    }

    /// Record a settled loader.
    pub fn settle(&mut self, outcome: &LoadOutcome) {
        self.statuses.write().insert(outcome.view, outcome.into());
    }
}
