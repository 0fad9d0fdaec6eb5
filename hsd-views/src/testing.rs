//! In-memory fetcher and recording renderer shared by the loader and dashboard tests.

use crate::render::Renderer;
use async_trait::async_trait;
use hsd_plot::ChartSpec;
use hsd_survey::{ApiConfig, Endpoint, Fetcher, LoadFailure, LoadResult};
use std::cell::RefCell;
use std::collections::HashMap;

pub const TEST_BASE: &str = "http://survey.test";

/// Serves canned bodies by URL; anything else fails like a refused connection.
#[derive(Default)]
pub struct MapFetcher {
    bodies: HashMap<String, String>,
}

impl MapFetcher {
    pub fn with_bodies(bodies: HashMap<Endpoint, String>) -> Self {
        let config = ApiConfig::new(TEST_BASE);
        Self {
            bodies: bodies
                .into_iter()
                .map(|(endpoint, body)| (config.url_for(endpoint), body))
                .collect(),
        }
    }
}

#[async_trait(?Send)]
impl Fetcher for MapFetcher {
    async fn get_text(&self, url: &str) -> LoadResult<String> {
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| LoadFailure::Network(format!("connection refused: {}", url)))
    }
}

/// One call received by [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum Drawn {
    Chart(String, ChartSpec),
    Error(String, String),
}

#[derive(Default)]
pub struct RecordingRenderer {
    calls: RefCell<Vec<Drawn>>,
    reject_charts: bool,
}

impl RecordingRenderer {
    /// A renderer whose every `render` call fails.
    pub fn failing() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            reject_charts: true,
        }
    }

    pub fn calls(&self) -> Vec<Drawn> {
        self.calls.borrow().clone()
    }

    pub fn charts(&self) -> Vec<ChartSpec> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Drawn::Chart(_, spec) => Some(spec.clone()),
                Drawn::Error(..) => None,
            })
            .collect()
    }

    pub fn chart_for(&self, container_id: &str) -> Option<ChartSpec> {
        self.calls.borrow().iter().find_map(|call| match call {
            Drawn::Chart(id, spec) if id == container_id => Some(spec.clone()),
            _ => None,
        })
    }

    /// Containers that received the error message.
    pub fn errors(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Drawn::Error(id, _) => Some(id.clone()),
                Drawn::Chart(..) => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, container_id: &str, spec: &ChartSpec) -> LoadResult<()> {
        if self.reject_charts {
            return Err(LoadFailure::Render("Plotly is not defined".to_string()));
        }
        self.calls
            .borrow_mut()
            .push(Drawn::Chart(container_id.to_string(), spec.clone()));
        Ok(())
    }

    fn show_error(&self, container_id: &str, message: &str) {
        self.calls
            .borrow_mut()
            .push(Drawn::Error(container_id.to_string(), message.to_string()));
    }
}

/// A well-formed body for every endpoint.
///
/// Bodies are literal text so object key order reaches the parser as written.
pub fn valid_bodies() -> HashMap<Endpoint, String> {
    [
        (
            Endpoint::AgeDistributionByGender,
            r#"{"data": {"male": [20, 30, 40], "female": [25, 35]}}"#,
        ),
        (
            Endpoint::ExerciseVsHealthByAge,
            r#"{"data": [
                {"age_group": "<30", "exercise_hours": [2.0, 5.5], "health_scores": [71, 88]},
                {"age_group": "60+", "exercise_hours": [1.0], "health_scores": [64]}
            ]}"#,
        ),
        (
            Endpoint::SleepVsStress,
            r#"{"sleep_hours": [6, 7, 8], "stress_levels": [5, 3, 2]}"#,
        ),
        (
            Endpoint::DoctorVisitsByCondition,
            r#"{"conditions": ["diabetes"], "avg_visits": [4.2], "patient_count": [10]}"#,
        ),
        (
            Endpoint::SeasonalDoctorVisits,
            r#"{
                "seasons": ["Winter", "Spring", "Summer", "Fall"],
                "avg_visits": [3.4, 2.9, 2.5, 3.1]
            }"#,
        ),
    ]
    .into_iter()
    .map(|(endpoint, body)| (endpoint, body.to_string()))
    .collect()
}
