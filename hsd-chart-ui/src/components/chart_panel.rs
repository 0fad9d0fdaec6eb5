//! One dashboard chart: header plus its Plotly container.

use super::{ChartContainer, ChartHeader};
use crate::state::DashboardState;
use dioxus::prelude::*;
use hsd_views::ChartView;

/// Panel for a single chart view.
/// Shows the loading overlay until that view's loader settles.
#[component]
pub fn ChartPanel(view: ChartView) -> Element {
    let state = use_context::<DashboardState>();
    let status = state.status(view);

    rsx! {
        section {
            style: "padding: 12px; border: 1px solid #e0e0e0; border-radius: 6px; background: #fff;",
            ChartHeader {
                title: view.title().to_string(),
                description: view.description().to_string(),
            }
            ChartContainer { view, status }
        }
    }
}
