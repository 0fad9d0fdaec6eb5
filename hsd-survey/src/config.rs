//! API base address configuration.
//!
//! The address is resolved once (at build time for the web app, from the
//! command line for the CLI) and handed to every loader explicitly.

use crate::endpoint::Endpoint;

/// Backend address used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Where the survey statistics API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash (e.g. "https://survey.example.org")
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve an optional override (typically `option_env!`) against the default.
    pub fn from_override(base_url: Option<&str>) -> Self {
        match base_url {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Absolute URL for an endpoint.
    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_for_joins_base_and_path() {
        let config = ApiConfig::default();
        assert_eq!(
            config.url_for(Endpoint::SleepVsStress),
            "http://127.0.0.1:8000/api/sleep-vs-stress"
        );
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let config = ApiConfig::new("https://survey.example.org/");
        assert_eq!(
            config.url_for(Endpoint::SeasonalDoctorVisits),
            "https://survey.example.org/api/seasonal-doctor-visits"
        );
    }

    #[test]
    fn blank_override_falls_back_to_default() {
        assert_eq!(ApiConfig::from_override(None), ApiConfig::default());
        assert_eq!(ApiConfig::from_override(Some("  ")), ApiConfig::default());
        assert_eq!(
            ApiConfig::from_override(Some("http://backend:9000")).base_url,
            "http://backend:9000"
        );
    }
}
