//! Fetching the query-input document
//!
//! `Orchestrator` drives the retry loop over the configured targets and
//! consults the response cache. The network side sits behind the `Transport`
//! trait; `HttpTransport` is the reqwest implementation used by the binary.

mod http;
mod orchestrator;

pub use http::HttpTransport;
pub use orchestrator::{DocumentSource, FetchOutcome, Orchestrator};

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::Target;

/// A response that made it back from the server, whatever its status
#[derive(Debug, Clone, Default)]
pub struct FetchedResponse {
    /// e.g. `HTTP/1.1 200 OK`
    pub status_line: String,
    /// Response headers in arrival order
    pub headers: Vec<(String, String)>,
    /// Full response body
    pub body: Vec<u8>,
}

/// A failed attempt. The retry loop absorbs these.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The per-request timeout elapsed
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// DNS, TLS, connection or protocol failure
    #[error("request failed: {0}")]
    Request(String),

    /// The response body could not be read to the end
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Issues one request for one target
#[async_trait]
pub trait Transport {
    /// Sends the configured request to `target`. `body` is only present for POST.
    async fn fetch(&self, target: &Target, body: Option<Vec<u8>>) -> Result<FetchedResponse, FetchError>;
}
