//! Transport seam between the loaders and whatever performs HTTP.
//!
//! The browser build plugs in a `fetch()`-backed implementation, the CLI a
//! `reqwest` one (feature `api`), and tests an in-memory map. Futures are
//! not required to be `Send` because browser futures never are.

use crate::config::ApiConfig;
use crate::error::LoadResult;
use crate::payload::{parse_payload, Payload};
use async_trait::async_trait;
use log::debug;

/// Retrieves a response body for an absolute URL.
#[async_trait(?Send)]
pub trait Fetcher {
    /// GET `url` and return the full body; non-success statuses are errors.
    async fn get_text(&self, url: &str) -> LoadResult<String>;
}

/// Fetch the endpoint bound to `P` and parse its body.
pub async fn fetch_payload<P, F>(fetcher: &F, config: &ApiConfig) -> LoadResult<P>
where
    P: Payload,
    F: Fetcher + ?Sized,
{
    let url = config.url_for(P::ENDPOINT);
    debug!("GET {}", url);
    let body = fetcher.get_text(&url).await?;
    parse_payload(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadFailure;
    use crate::payload::SeasonalDoctorVisits;
    use std::collections::HashMap;

    struct MapFetcher(HashMap<String, String>);

    #[async_trait(?Send)]
    impl Fetcher for MapFetcher {
        async fn get_text(&self, url: &str) -> LoadResult<String> {
            self.0
                .get(url)
                .cloned()
                .ok_or_else(|| LoadFailure::Status {
                    status: 404,
                    url: url.to_string(),
                })
        }
    }

    #[tokio::test]
    async fn fetch_payload_requests_the_bound_endpoint() {
        let config = ApiConfig::new("http://survey.test");
        let fetcher = MapFetcher(HashMap::from([(
            "http://survey.test/api/seasonal-doctor-visits".to_string(),
            r#"{"seasons": ["Winter", "Spring"], "avg_visits": [3.1, 2.4]}"#.to_string(),
        )]));

        let payload: SeasonalDoctorVisits = fetch_payload(&fetcher, &config).await.unwrap();
        assert_eq!(payload.seasons, vec!["Winter", "Spring"]);
    }

    #[tokio::test]
    async fn fetch_payload_passes_transport_errors_through() {
        let config = ApiConfig::new("http://survey.test");
        let fetcher = MapFetcher(HashMap::new());

        let err = fetch_payload::<SeasonalDoctorVisits, _>(&fetcher, &config)
            .await
            .unwrap_err();
        assert!(matches!(err, LoadFailure::Status { status: 404, .. }));
    }
}
