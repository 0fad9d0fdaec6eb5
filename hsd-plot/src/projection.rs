//! Projections from survey payloads to chart specifications.
//!
//! One function per dashboard chart. They assume the payload has already
//! passed [`hsd_survey::payload::Payload::validate`], so parallel sequences
//! line up index for index.

use crate::spec::{
    BarMode, ChartSpec, ColorBar, HoverMode, Layout, Line, Marker, MarkerColor, Mode,
    Trace, TraceType, Values,
};
use hsd_survey::payload::{
    AgeDistribution, DoctorVisitsByCondition, ExerciseVsHealth, SeasonalDoctorVisits,
    SleepVsStress,
};

/// Number of bins in each age histogram.
pub const AGE_HISTOGRAM_BINS: u32 = 20;
/// Opacity of overlaid age histograms.
pub const AGE_HISTOGRAM_OPACITY: f64 = 0.7;
/// Colour scale for the sleep/stress scatter.
pub const STRESS_COLORSCALE: &str = "Viridis";
/// Fill colour of the doctor-visit bars.
pub const VISIT_BAR_COLOR: &str = "rgba(99, 110, 250, 0.7)";

/// Overlaid histograms of age, one per gender, in response order.
pub fn age_distribution(payload: &AgeDistribution) -> ChartSpec {
    let traces = payload
        .data
        .iter()
        .map(|(gender, ages)| Trace {
            name: Some(gender.to_string()),
            opacity: Some(AGE_HISTOGRAM_OPACITY),
            nbinsx: Some(AGE_HISTOGRAM_BINS),
            ..Trace::new(TraceType::Histogram, Values::Numbers(ages.to_vec()))
        })
        .collect();

    let layout = Layout {
        barmode: Some(BarMode::Overlay),
        ..Layout::with_axes("Age (years)", "Frequency")
    };

    ChartSpec { traces, layout }
}

/// Exercise hours against health score, one point cloud per age group.
pub fn exercise_vs_health(payload: &ExerciseVsHealth) -> ChartSpec {
    let traces = payload
        .data
        .iter()
        .map(|group| Trace {
            y: Some(Values::Numbers(group.health_scores.clone())),
            mode: Some(Mode::Markers),
            name: Some(format!("Age {}", group.age_group)),
            marker: Some(Marker::sized(5.0)),
            ..Trace::new(
                TraceType::Scatter,
                Values::Numbers(group.exercise_hours.clone()),
            )
        })
        .collect();

    let layout = Layout {
        hovermode: Some(HoverMode::Closest),
        ..Layout::with_axes("Exercise Hours Per Week", "Health Score")
    };

    ChartSpec { traces, layout }
}

/// Sleep hours against stress, each point coloured by its own stress level.
pub fn sleep_vs_stress(payload: &SleepVsStress) -> ChartSpec {
    let trace = Trace {
        y: Some(Values::Numbers(payload.stress_levels.clone())),
        mode: Some(Mode::Markers),
        marker: Some(Marker {
            size: Some(6.0),
            color: Some(MarkerColor::PerPoint(payload.stress_levels.clone())),
            colorscale: Some(STRESS_COLORSCALE.to_string()),
            showscale: Some(true),
            colorbar: Some(ColorBar {
                title: "Stress Level".to_string(),
            }),
        }),
        ..Trace::new(TraceType::Scatter, Values::Numbers(payload.sleep_hours.clone()))
    };

    let layout = Layout {
        hovermode: Some(HoverMode::Closest),
        ..Layout::with_axes("Sleep Hours Per Night", "Stress Level (1-10)")
    };

    ChartSpec {
        traces: vec![trace],
        layout,
    }
}

/// Average yearly doctor visits per chronic condition, bars labelled with patient counts.
///
/// Whole counts print without a fraction (`10.0` -> "10 patients").
pub fn doctor_visits_by_condition(payload: &DoctorVisitsByCondition) -> ChartSpec {
    let trace = Trace {
        y: Some(Values::Numbers(payload.avg_visits.clone())),
        text: Some(
            payload
                .patient_count
                .iter()
                .map(|count| format!("{} patients", count))
                .collect(),
        ),
        textposition: Some("auto".to_string()),
        marker: Some(Marker {
            color: Some(MarkerColor::Fixed(VISIT_BAR_COLOR.to_string())),
            ..Marker::default()
        }),
        ..Trace::new(TraceType::Bar, Values::Labels(payload.conditions.clone()))
    };

    let mut layout = Layout::with_axes("Chronic Condition", "Average Doctor Visits Per Year");
    layout.xaxis.tickangle = Some(-45);
    layout.margin.b = 80;

    ChartSpec {
        traces: vec![trace],
        layout,
    }
}

/// Average doctor visits per season, as a connected line in the order received.
pub fn seasonal_doctor_visits(payload: &SeasonalDoctorVisits) -> ChartSpec {
    let trace = Trace {
        y: Some(Values::Numbers(payload.avg_visits.clone())),
        mode: Some(Mode::LinesMarkers),
        marker: Some(Marker::sized(10.0)),
        line: Some(Line { width: 3.0 }),
        ..Trace::new(TraceType::Scatter, Values::Labels(payload.seasons.clone()))
    };

    let layout = Layout {
        hovermode: Some(HoverMode::XUnified),
        ..Layout::with_axes("Season", "Average Doctor Visits Per Year")
    };

    ChartSpec {
        traces: vec![trace],
        layout,
    }
}
