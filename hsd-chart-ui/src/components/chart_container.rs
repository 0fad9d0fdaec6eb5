//! The element a chart view draws into.

use crate::state::ViewStatus;
use dioxus::prelude::*;
use hsd_views::ChartView;

/// Plotly target for `view`.
///
/// The inner element belongs to the renderer once the loader settles: it
/// holds either the plot or the `error-message` paragraph. This component
/// only owns the wrapper and the loading overlay.
#[component]
pub fn ChartContainer(
    view: ChartView,
    status: ViewStatus,
    #[props(default = 400)] min_height: u32,
) -> Element {
    let id = view.container_id();
    let title = view.title();
    let class = format!("chart-container {}", status.css_class());
    let style = format!("min-height: {}px; position: relative; width: 100%;", min_height);
    let inner_style = format!("width: 100%; min-height: {}px;", min_height);

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            if status == ViewStatus::Loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Loading {title}..."
                }
            }
            div {
                id: "{id}",
                style: "{inner_style}",
            }
        }
    }
}
