//! Banner naming the charts whose loaders failed.

use dioxus::prelude::*;
use hsd_views::ChartView;

/// Lists the failed views by title, styled with the page's `error-message` class.
/// Renders nothing when `failed` is empty.
#[component]
pub fn ErrorDisplay(failed: Vec<ChartView>) -> Element {
    if failed.is_empty() {
        return rsx! {};
    }

    let heading = if failed.len() == ChartView::ALL.len() {
        "No charts could be loaded. Is the survey API running?".to_string()
    } else {
        format!("{} of {} charts could not be loaded:", failed.len(), ChartView::ALL.len())
    };

    let items: Vec<(&str, &str)> = failed
        .iter()
        .map(|view| (view.container_id(), view.title()))
        .collect();

    rsx! {
        div {
            class: "error-message",
            style: "margin: 8px 0; text-align: left;",
            strong { "{heading}" }
            ul {
                style: "margin: 4px 0 0 0;",
                for (id, title) in items {
                    li { key: "{id}", "{title}" }
                }
            }
        }
    }
}
