//! Dry-run every loader and report the outcome per chart.

use hsd_plot::ChartSpec;
use hsd_survey::http::HttpFetcher;
use hsd_survey::{ApiConfig, Fetcher, LoadResult};
use hsd_views::{Dashboard, DashboardReport, Renderer};
use log::{error, info};

/// Accepts every chart without drawing it; logs the series count.
struct DiscardRenderer;

impl Renderer for DiscardRenderer {
    fn render(&self, container_id: &str, spec: &ChartSpec) -> LoadResult<()> {
        let points: usize = spec.traces.iter().map(|t| t.point_count()).sum();
        info!(
            "{}: {} series, {} points",
            container_id,
            spec.traces.len(),
            points
        );
        Ok(())
    }

    fn show_error(&self, _container_id: &str, _message: &str) {}
}

/// Run every loader through `fetcher` and fail if any chart did not load.
pub async fn check_with<F: Fetcher + ?Sized>(
    config: ApiConfig,
    fetcher: &F,
) -> anyhow::Result<DashboardReport> {
    let report = Dashboard::new(config).load_all(fetcher, &DiscardRenderer).await;

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(()) => info!("OK   {}", outcome.view.title()),
            Err(e) => error!("FAIL {}: {}", outcome.view.title(), e),
        }
    }

    if !report.all_rendered() {
        anyhow::bail!(
            "{} of {} charts failed to load",
            report.failed_views().len(),
            report.outcomes.len()
        );
    }
    Ok(report)
}

/// Check that every chart loads from the survey API at `base_url`.
pub async fn run_check(base_url: &str) -> anyhow::Result<()> {
    let config = ApiConfig::new(base_url);
    info!("Checking charts against {}", config.base_url);

    let fetcher = HttpFetcher::new(reqwest::Client::new());
    check_with(config, &fetcher).await?;
    Ok(())
}
