//! Plotly-backed [`Renderer`] used by the dashboard app.

use crate::js_bridge;
use hsd_plot::ChartSpec;
use hsd_survey::{LoadFailure, LoadResult};
use hsd_views::{error_markup, Renderer, ERROR_MESSAGE};
use log::warn;

/// Draws chart specs with `Plotly.newPlot` and error messages via the DOM.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlotlyRenderer;

impl Renderer for PlotlyRenderer {
    fn render(&self, container_id: &str, spec: &ChartSpec) -> LoadResult<()> {
        let traces_json = serde_json::to_string(&spec.traces)
            .map_err(|e| LoadFailure::Render(e.to_string()))?;
        let layout_json = serde_json::to_string(&spec.layout)
            .map_err(|e| LoadFailure::Render(e.to_string()))?;
        js_bridge::render_plotly_chart(container_id, &traces_json, &layout_json, ERROR_MESSAGE)
    }

    fn show_error(&self, container_id: &str, message: &str) {
        let container = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(container_id));
        match container {
            Some(el) => el.set_inner_html(&error_markup(message)),
            None => warn!("Chart container {} not found", container_id),
        }
    }
}
