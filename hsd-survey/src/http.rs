//! Native HTTP transport backed by `reqwest`.

use crate::error::{LoadFailure, LoadResult};
use crate::fetch::Fetcher;
use async_trait::async_trait;
use reqwest::Client;

/// [`Fetcher`] for native builds. One attempt per request, no timeout.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl Fetcher for HttpFetcher {
    async fn get_text(&self, url: &str) -> LoadResult<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadFailure::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}
