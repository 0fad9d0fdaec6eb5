//! Load failure type shared by every chart loader.

use thiserror::Error;

/// Anything that can stop a chart from being drawn.
///
/// Loaders treat all variants the same way (log, then show the fixed error
/// message); the variants only exist so the log record says what happened.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadFailure {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The body was not the JSON shape the endpoint promises
    #[error("malformed response body: {0}")]
    Decode(String),

    /// Parallel sequences that should line up do not
    #[error("field `{field}` has {actual} entries, expected {expected}")]
    ShapeMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The renderer rejected the chart specification
    #[error("render failed: {0}")]
    Render(String),
}

impl From<serde_json::Error> for LoadFailure {
    fn from(err: serde_json::Error) -> Self {
        LoadFailure::Decode(err.to_string())
    }
}

#[cfg(feature = "api")]
impl From<reqwest::Error> for LoadFailure {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => LoadFailure::Status {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            },
            None if err.is_decode() => LoadFailure::Decode(err.to_string()),
            None => LoadFailure::Network(err.to_string()),
        }
    }
}

/// Result alias for loader operations.
pub type LoadResult<T> = Result<T, LoadFailure>;

/// Check that a parallel sequence has the length of its anchor sequence.
pub(crate) fn expect_len(field: &'static str, expected: usize, actual: usize) -> LoadResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(LoadFailure::ShapeMismatch {
            field,
            expected,
            actual,
        })
    }
}
