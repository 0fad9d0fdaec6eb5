//! Footer reporting how many charts made it onto the page.

use super::ErrorDisplay;
use crate::state::DashboardState;
use dioxus::prelude::*;

/// Summary line shown once every loader has settled.
#[component]
pub fn DashboardSummary() -> Element {
    let state = use_context::<DashboardState>();
    let report = state.report.read().clone();

    let Some(report) = report else {
        return rsx! {
            p {
                style: "font-size: 12px; color: #888; text-align: center;",
                "Loading survey statistics..."
            }
        };
    };

    let total = report.outcomes.len();
    let rendered = report.rendered_count();

    rsx! {
        ErrorDisplay { failed: report.failed_views() }
        p {
            style: "font-size: 12px; color: #888; text-align: center;",
            "{rendered} of {total} charts loaded"
        }
    }
}
