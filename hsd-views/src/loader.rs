//! Per-chart loader: fetch, parse, project, render.

use crate::render::{Renderer, ERROR_MESSAGE};
use crate::view::ChartView;
use hsd_plot::{projection, ChartSpec};
use hsd_survey::payload::{
    AgeDistribution, DoctorVisitsByCondition, ExerciseVsHealth, SeasonalDoctorVisits,
    SleepVsStress,
};
use hsd_survey::{fetch_payload, ApiConfig, Fetcher, LoadFailure, LoadResult};
use log::{debug, error};

/// How a single loader invocation ended.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub view: ChartView,
    pub result: LoadResult<()>,
}

impl LoadOutcome {
    pub fn is_rendered(&self) -> bool {
        self.result.is_ok()
    }

    pub fn failure(&self) -> Option<&LoadFailure> {
        self.result.as_ref().err()
    }
}

/// Loads and draws one chart.
///
/// The API address is injected at construction; the loader keeps no other
/// state, so running it twice against the same response draws the same
/// chart twice.
#[derive(Debug, Clone)]
pub struct ViewLoader {
    view: ChartView,
    config: ApiConfig,
}

impl ViewLoader {
    pub fn new(view: ChartView, config: ApiConfig) -> Self {
        Self { view, config }
    }

    pub fn view(&self) -> ChartView {
        self.view
    }

    /// Fetch the view's endpoint and project the response into a chart.
    pub async fn build_spec<F: Fetcher + ?Sized>(&self, fetcher: &F) -> LoadResult<ChartSpec> {
        let config = &self.config;
        let spec = match self.view {
            ChartView::AgeDistribution => projection::age_distribution(
                &fetch_payload::<AgeDistribution, F>(fetcher, config).await?,
            ),
            ChartView::ExerciseVsHealth => projection::exercise_vs_health(
                &fetch_payload::<ExerciseVsHealth, F>(fetcher, config).await?,
            ),
            ChartView::SleepVsStress => projection::sleep_vs_stress(
                &fetch_payload::<SleepVsStress, F>(fetcher, config).await?,
            ),
            ChartView::DoctorVisits => projection::doctor_visits_by_condition(
                &fetch_payload::<DoctorVisitsByCondition, F>(fetcher, config).await?,
            ),
            ChartView::SeasonalVisits => projection::seasonal_doctor_visits(
                &fetch_payload::<SeasonalDoctorVisits, F>(fetcher, config).await?,
            ),
        };
        Ok(spec)
    }

    /// Run the loader to completion.
    ///
    /// Every failure is contained here: it is logged with the view's
    /// prefix, the container gets [`ERROR_MESSAGE`], and the outcome is
    /// returned rather than propagated.
    pub async fn run<F, R>(&self, fetcher: &F, renderer: &R) -> LoadOutcome
    where
        F: Fetcher + ?Sized,
        R: Renderer + ?Sized,
    {
        let container_id = self.view.container_id();
        let result = match self.build_spec(fetcher).await {
            Ok(spec) => renderer.render(container_id, &spec),
            Err(e) => Err(e),
        };

        match &result {
            Ok(()) => debug!("Rendered {}", container_id),
            Err(e) => {
                error!("{} {}", self.view.failure_prefix(), e);
                renderer.show_error(container_id, ERROR_MESSAGE);
            }
        }

        LoadOutcome {
            view: self.view,
            result,
        }
    }
}
