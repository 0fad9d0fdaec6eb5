//! Health & Lifestyle Dashboard
//!
//! Five Plotly charts over pre-aggregated health survey statistics, each
//! fed by its own endpoint of the survey API.
//!
//! Data flow:
//! 1. The API base address is fixed at build time (`HSD_API_BASE`, falling
//!    back to the local development server).
//! 2. On mount, the chart panels (and their container divs) are in the DOM.
//!    One effect loads the Plotly helpers and starts every chart loader.
//! 3. Each loader fetches its endpoint, projects the response into a chart
//!    spec and draws it; a failed chart shows "Error loading data" without
//!    affecting the others.
//! 4. When all five have settled, the footer reports how many loaded.

use dioxus::prelude::*;
use hsd_chart_ui::components::{ChartPanel, DashboardSummary};
use hsd_chart_ui::fetch::WebFetcher;
use hsd_chart_ui::js_bridge;
use hsd_chart_ui::renderer::PlotlyRenderer;
use hsd_chart_ui::state::DashboardState;
use hsd_survey::ApiConfig;
use hsd_views::{ChartView, Dashboard, LoadOutcome};

/// Build-time override of the survey API address.
const API_BASE_OVERRIDE: Option<&str> = option_env!("HSD_API_BASE");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("health-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(DashboardState::new);

    // ─── Initializer: runs once the panels are mounted ───
    use_effect(move || {
        js_bridge::init_charts();

        let config = ApiConfig::from_override(API_BASE_OVERRIDE);
        log::info!("Loading dashboard from {}", config.base_url);

        spawn(async move {
            let dashboard = Dashboard::new(config);
            let report = dashboard
                .load_all_observed(&WebFetcher, &PlotlyRenderer, move |outcome: &LoadOutcome| {
                    let mut state = state;
                    state.settle(outcome);
                })
                .await;
            state.report.set(Some(report));
        });
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif;",

            header {
                style: "margin-bottom: 16px;",
                h1 {
                    style: "margin: 0 0 4px 0; font-size: 24px;",
                    "Health & Lifestyle Dashboard"
                }
                p {
                    style: "margin: 0; font-size: 13px; color: #666;",
                    "Aggregated statistics from the health and lifestyle survey."
                }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(520px, 1fr)); gap: 16px;",
                for view in ChartView::ALL {
                    ChartPanel { key: "{view}", view }
                }
            }

            footer {
                style: "margin-top: 16px;",
                DashboardSummary {}
            }
        }
    }
}
