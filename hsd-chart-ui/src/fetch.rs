//! `window.fetch()` transport for the browser build.

use async_trait::async_trait;
use hsd_survey::{Fetcher, LoadFailure, LoadResult};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// [`Fetcher`] backed by the browser's Fetch API.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebFetcher;

/// Best-effort text for a rejected promise value.
fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[async_trait(?Send)]
impl Fetcher for WebFetcher {
    async fn get_text(&self, url: &str) -> LoadResult<String> {
        let window = web_sys::window()
            .ok_or_else(|| LoadFailure::Network("no window available".to_string()))?;

        let response = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(|e| LoadFailure::Network(describe(&e)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| LoadFailure::Network("fetch did not resolve to a Response".to_string()))?;

        if !response.ok() {
            return Err(LoadFailure::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .map_err(|e| LoadFailure::Decode(describe(&e)))?;
        let body = JsFuture::from(body)
            .await
            .map_err(|e| LoadFailure::Network(describe(&e)))?;
        body.as_string()
            .ok_or_else(|| LoadFailure::Decode("response body is not text".to_string()))
    }
}
