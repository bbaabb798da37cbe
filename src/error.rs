use std::time::Duration;

use thiserror::Error;

/// Failures of a recommendation round trip.
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("server reported an error: {0}")]
    Server(String),

    #[error("response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unexpected response shape: {0}")]
    InvalidPayload(String),

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("no response within {0:?}")]
    Timeout(Duration),
}
