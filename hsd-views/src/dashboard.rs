//! Dashboard initializer: start every chart loader, then wait for all of them.

use crate::loader::{LoadOutcome, ViewLoader};
use crate::render::Renderer;
use crate::view::ChartView;
use futures::future::join_all;
use hsd_survey::{ApiConfig, Fetcher};
use log::info;

/// The five chart loaders, sharing one injected [`ApiConfig`].
#[derive(Debug, Clone)]
pub struct Dashboard {
    loaders: Vec<ViewLoader>,
}

impl Dashboard {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_views(config, &ChartView::ALL)
    }

    /// A dashboard restricted to `views`, started in the given order.
    pub fn with_views(config: ApiConfig, views: &[ChartView]) -> Self {
        Self {
            loaders: views
                .iter()
                .map(|view| ViewLoader::new(*view, config.clone()))
                .collect(),
        }
    }

    pub fn views(&self) -> Vec<ChartView> {
        self.loaders.iter().map(ViewLoader::view).collect()
    }

    /// Start all loaders together and return once every one has settled.
    pub async fn load_all<F, R>(&self, fetcher: &F, renderer: &R) -> DashboardReport
    where
        F: Fetcher + ?Sized,
        R: Renderer + ?Sized,
    {
        self.load_all_observed(fetcher, renderer, |_| {}).await
    }

    /// Like [`Dashboard::load_all`], calling `on_settled` as each loader finishes.
    pub async fn load_all_observed<F, R, O>(
        &self,
        fetcher: &F,
        renderer: &R,
        on_settled: O,
    ) -> DashboardReport
    where
        F: Fetcher + ?Sized,
        R: Renderer + ?Sized,
        O: Fn(&LoadOutcome),
    {
        let on_settled = &on_settled;
        let loads = self.loaders.iter().map(|loader| async move {
            let outcome = loader.run(fetcher, renderer).await;
            on_settled(&outcome);
            outcome
        });

        let report = DashboardReport {
            outcomes: join_all(loads).await,
        };
        info!(
            "Dashboard settled: {} of {} charts rendered",
            report.rendered_count(),
            report.outcomes.len()
        );
        report
    }
}

/// Per-chart outcomes, in the order the loaders were started.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardReport {
    pub outcomes: Vec<LoadOutcome>,
}

impl DashboardReport {
    pub fn rendered_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_rendered()).count()
    }

    pub fn failed_views(&self) -> Vec<ChartView> {
        self.outcomes
            .iter()
            .filter(|o| !o.is_rendered())
            .map(|o| o.view)
            .collect()
    }

    pub fn all_rendered(&self) -> bool {
        self.outcomes.iter().all(LoadOutcome::is_rendered)
    }

    pub fn outcome(&self, view: ChartView) -> Option<&LoadOutcome> {
        self.outcomes.iter().find(|o| o.view == view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ERROR_MESSAGE;
    use crate::testing::{valid_bodies, Drawn, MapFetcher, RecordingRenderer, TEST_BASE};
    use std::cell::RefCell;

    fn dashboard() -> Dashboard {
        Dashboard::new(ApiConfig::new(TEST_BASE))
    }

    #[tokio::test]
    async fn all_five_charts_render() {
        let fetcher = MapFetcher::with_bodies(valid_bodies());
        let renderer = RecordingRenderer::default();

        let report = dashboard().load_all(&fetcher, &renderer).await;

        assert!(report.all_rendered());
        assert_eq!(report.rendered_count(), 5);
        for view in ChartView::ALL {
            assert!(renderer.chart_for(view.container_id()).is_some(), "{} missing", view);
        }
        assert!(renderer.errors().is_empty());
    }

    #[tokio::test]
    async fn one_failing_loader_leaves_the_others_untouched() {
        let baseline = RecordingRenderer::default();
        dashboard()
            .load_all(&MapFetcher::with_bodies(valid_bodies()), &baseline)
            .await;

        for broken in ChartView::ALL {
            let mut bodies = valid_bodies();
            bodies.remove(&broken.endpoint());
            let fetcher = MapFetcher::with_bodies(bodies);
            let renderer = RecordingRenderer::default();

            let report = dashboard().load_all(&fetcher, &renderer).await;

            assert_eq!(report.failed_views(), vec![broken]);
            assert_eq!(
                renderer.errors(),
                vec![broken.container_id().to_string()]
            );
            for view in ChartView::ALL.into_iter().filter(|v| *v != broken) {
                assert_eq!(
                    renderer.chart_for(view.container_id()),
                    baseline.chart_for(view.container_id()),
                    "{} changed when {} failed",
                    view,
                    broken
                );
            }
        }
    }

    #[tokio::test]
    async fn backend_down_marks_every_chart() {
        let renderer = RecordingRenderer::default();
        let report = dashboard().load_all(&MapFetcher::default(), &renderer).await;

        assert_eq!(report.rendered_count(), 0);
        assert_eq!(report.failed_views(), ChartView::ALL.to_vec());
        assert!(renderer
            .calls()
            .iter()
            .all(|call| matches!(call, Drawn::Error(_, msg) if msg == ERROR_MESSAGE)));
    }

    #[tokio::test]
    async fn observer_sees_each_outcome_once() {
        let mut bodies = valid_bodies();
        bodies.remove(&ChartView::SeasonalVisits.endpoint());
        let fetcher = MapFetcher::with_bodies(bodies);
        let renderer = RecordingRenderer::default();
        let seen = RefCell::new(Vec::new());

        let report = dashboard()
            .load_all_observed(&fetcher, &renderer, |outcome| {
                seen.borrow_mut().push((outcome.view, outcome.is_rendered()))
            })
            .await;

        let mut seen = seen.into_inner();
        seen.sort();
        assert_eq!(seen.len(), 5);
        assert!(seen.contains(&(ChartView::SeasonalVisits, false)));
        assert!(!report.outcome(ChartView::SeasonalVisits).unwrap().is_rendered());
        assert!(report.outcome(ChartView::AgeDistribution).unwrap().is_rendered());
    }

    #[tokio::test]
    async fn report_keeps_start_order() {
        let views = [ChartView::SeasonalVisits, ChartView::AgeDistribution];
        let dashboard = Dashboard::with_views(ApiConfig::new(TEST_BASE), &views);
        let report = dashboard
            .load_all(
                &MapFetcher::with_bodies(valid_bodies()),
                &RecordingRenderer::default(),
            )
            .await;

        let order: Vec<ChartView> = report.outcomes.iter().map(|o| o.view).collect();
        assert_eq!(order, views.to_vec());
        assert_eq!(dashboard.views(), views.to_vec());
    }
}
