//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Plotly helpers live in `assets/js/plotly-charts.js` and are loaded at
//! runtime. They are evaluated as globals (no ES modules) and exposed via
//! `window.*`. This module provides Rust wrappers that serialize data and
//! call those globals.

use hsd_survey::{LoadFailure, LoadResult};

// Embed the Plotly helper JS at compile time
static PLOTLY_CHARTS_JS: &str = include_str!("../assets/js/plotly-charts.js");

/// Quote a Rust string as a JS string literal.
///
/// JSON string syntax is a subset of JS string literal syntax, so
/// `serde_json` does the escaping.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Initialize the chart helpers with a wait-for-Plotly polling loop.
///
/// The helper file defines its functions via `function` declarations. To
/// keep them global (not block-scoped inside the setInterval callback) they
/// are evaluated at global scope via indirect eval once Plotly is ready,
/// then promoted to `window.*` explicitly.
pub fn init_charts() {
    let store_js = format!("window.__hsdChartScripts = {};", js_string(PLOTLY_CHARTS_JS));
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__hsdChartsReady || window.__hsdChartsPending) { return; }
            window.__hsdChartsPending = true;
            var waitForPlotly = setInterval(function() {
                if (typeof Plotly !== 'undefined') {
                    clearInterval(waitForPlotly);
                    (0, eval)(window.__hsdChartScripts);
                    delete window.__hsdChartScripts;
                    if (typeof renderHealthChart !== 'undefined') window.renderHealthChart = renderHealthChart;
                    window.__hsdChartsReady = true;
                    console.log('HSD charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Wrap `call` (a JS expression using `window.<function_name>`) in a loop
/// that waits for the helpers and the container element.
fn when_ready(function_name: &str, container_id: &str, call: &str) -> String {
    let container = js_string(container_id);
    format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__hsdChartsReady &&
                    typeof window.{function_name} !== 'undefined' &&
                    document.getElementById({container})) {{
                    clearInterval(poll);
                    try {{
                        {call};
                    }} catch(e) {{ console.error('[HSD] {function_name} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Draw a Plotly chart into `container_id`.
///
/// Returns an error only if the call could not be scheduled; failures
/// inside Plotly are handled by the helper, which shows `error_message`.
pub fn render_plotly_chart(
    container_id: &str,
    traces_json: &str,
    layout_json: &str,
    error_message: &str,
) -> LoadResult<()> {
    let call = format!(
        "window.renderHealthChart({}, {}, {}, {})",
        js_string(container_id),
        js_string(traces_json),
        js_string(layout_json),
        js_string(error_message),
    );
    js_sys::eval(&when_ready("renderHealthChart", container_id, &call))
        .map(|_| ())
        .map_err(|e| LoadFailure::Render(format!("{:?}", e)))
}
