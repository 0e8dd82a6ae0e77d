use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

use super::transport::TransportError;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: TransportError,
    },
    #[error("response from {url} is not valid JSON: {source}")]
    MalformedJson {
        url: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("API key is not a valid header value")]
    InvalidCredential(#[from] InvalidHeaderValue),
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}
