//! Write each chart's Plotly spec to disk.

use hsd_plot::ChartSpec;
use hsd_survey::http::HttpFetcher;
use hsd_survey::{ApiConfig, Fetcher, LoadFailure, LoadResult};
use hsd_views::{error_markup, Dashboard, DashboardReport, Renderer};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Renders into files: `<container-id>.json` holds `{"data": [...], "layout": {...}}`,
/// ready for `Plotly.newPlot(el, spec.data, spec.layout)`.
pub struct SnapshotRenderer {
    out_dir: PathBuf,
}

impl SnapshotRenderer {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn chart_path(&self, container_id: &str) -> PathBuf {
        self.out_dir.join(format!("{}.json", container_id))
    }

    pub fn error_path(&self, container_id: &str) -> PathBuf {
        self.out_dir.join(format!("{}.error.html", container_id))
    }
}

/// Remove a leftover file from an earlier run, ignoring "not found".
fn remove_stale(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!("Could not remove stale {}: {}", path.display(), e);
        }
    }
}

impl Renderer for SnapshotRenderer {
    fn render(&self, container_id: &str, spec: &ChartSpec) -> LoadResult<()> {
        let json =
            serde_json::to_string_pretty(spec).map_err(|e| LoadFailure::Render(e.to_string()))?;
        let path = self.chart_path(container_id);
        fs::write(&path, json)
            .map_err(|e| LoadFailure::Render(format!("{}: {}", path.display(), e)))?;
        remove_stale(&self.error_path(container_id));
        Ok(())
    }

    fn show_error(&self, container_id: &str, message: &str) {
        let path = self.error_path(container_id);
        if let Err(e) = fs::write(&path, error_markup(message)) {
            warn!("Could not write {}: {}", path.display(), e);
        }
        remove_stale(&self.chart_path(container_id));
    }
}

/// Run every loader and write the results into `out_dir`.
pub async fn snapshot_with<F: Fetcher + ?Sized>(
    config: ApiConfig,
    fetcher: &F,
    out_dir: &Path,
) -> anyhow::Result<DashboardReport> {
    fs::create_dir_all(out_dir)?;
    let renderer = SnapshotRenderer::new(out_dir);
    Ok(Dashboard::new(config).load_all(fetcher, &renderer).await)
}

/// Snapshot all five charts from a live survey API.
pub async fn run_snapshot(base_url: &str, out_dir: &str) -> anyhow::Result<()> {
    let config = ApiConfig::new(base_url);
    info!("Snapshotting charts from {} into {}", config.base_url, out_dir);

    let fetcher = HttpFetcher::new(reqwest::Client::new());
    let report = snapshot_with(config, &fetcher, Path::new(out_dir)).await?;

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(()) => info!("{}: written", outcome.view),
            Err(e) => warn!("{}: {}", outcome.view, e),
        }
    }

    let failed = report.failed_views();
    if !failed.is_empty() {
        anyhow::bail!(
            "{} of {} charts failed to load",
            failed.len(),
            report.outcomes.len()
        );
    }
    Ok(())
}
