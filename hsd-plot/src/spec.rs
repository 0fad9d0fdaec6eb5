//! Serializable Plotly trace and layout structures.
//!
//! Only the attributes the dashboard sets are modelled. Unset options are
//! skipped during serialization so Plotly falls back to its own defaults.

use serde::{Deserialize, Serialize};

/// A complete chart: the `data` and `layout` arguments of `Plotly.newPlot`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(rename = "data")]
    pub traces: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceType {
    Histogram,
    Scatter,
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "markers")]
    Markers,
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

/// Axis values: numeric samples or category labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Values {
    Numbers(Vec<f64>),
    Labels(Vec<String>),
}

impl Values {
    pub fn len(&self) -> usize {
        match self {
            Values::Numbers(v) => v.len(),
            Values::Labels(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub trace_type: TraceType,
    pub x: Values,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Values>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Histogram bin count along x
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbinsx: Option<u32>,
    /// Per-point text labels (drawn on bars)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
}

impl Trace {
    /// A trace of the given type with every optional attribute unset.
    pub fn new(trace_type: TraceType, x: Values) -> Self {
        Self {
            trace_type,
            x,
            y: None,
            name: None,
            mode: None,
            opacity: None,
            nbinsx: None,
            text: None,
            textposition: None,
            marker: None,
            line: None,
        }
    }

    /// Number of points (or samples, for histograms) in the trace.
    pub fn point_count(&self) -> usize {
        self.x.len()
    }
}

/// Marker colour: one fixed colour, or one value per point mapped through a colour scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkerColor {
    Fixed(String),
    PerPoint(Vec<f64>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<MarkerColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showscale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorbar: Option<ColorBar>,
}

impl Marker {
    pub fn sized(size: f64) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorBar {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    Overlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverMode {
    #[serde(rename = "closest")]
    Closest,
    #[serde(rename = "x unified")]
    XUnified,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            l: 50,
            r: 50,
            t: 30,
            b: 50,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Tick label rotation in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickangle: Option<i32>,
}

impl Axis {
    pub fn titled(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            tickangle: None,
        }
    }
}

/// Chart-wide presentation options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: String,
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<BarMode>,
    pub margin: Margin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<HoverMode>,
}

impl Layout {
    /// Untitled layout with the dashboard's standard margins.
    pub fn with_axes(x_title: &str, y_title: &str) -> Self {
        Self {
            title: String::new(),
            xaxis: Axis::titled(x_title),
            yaxis: Axis::titled(y_title),
            barmode: None,
            margin: Margin::default(),
            hovermode: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_trace_options_are_omitted() {
        let trace = Trace::new(TraceType::Bar, Values::Labels(vec!["asthma".to_string()]));
        assert_eq!(
            serde_json::to_value(&trace).unwrap(),
            json!({"type": "bar", "x": ["asthma"]})
        );
    }

    #[test]
    fn enum_options_use_plotly_spelling() {
        assert_eq!(serde_json::to_value(Mode::LinesMarkers).unwrap(), json!("lines+markers"));
        assert_eq!(serde_json::to_value(HoverMode::XUnified).unwrap(), json!("x unified"));
        assert_eq!(serde_json::to_value(BarMode::Overlay).unwrap(), json!("overlay"));
    }

    #[test]
    fn chart_spec_serializes_as_new_plot_arguments() {
        let spec = ChartSpec {
            traces: vec![],
            layout: Layout::with_axes("Season", "Visits"),
        };
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["data"], json!([]));
        assert_eq!(value["layout"]["margin"], json!({"l": 50, "r": 50, "t": 30, "b": 50}));
        assert_eq!(value["layout"]["xaxis"], json!({"title": "Season"}));
    }
}
