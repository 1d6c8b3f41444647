//! reqwest-backed transport implementation.
use super::{RawResponse, SearchRequest, Transport, TransportError};
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Transport that executes requests with a blocking reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Creates a transport with reqwest defaults and the given overall timeout.
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Wraps an already configured reqwest client.
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: SearchRequest) -> Result<RawResponse, TransportError> {
        let response = self
            .client
            .get(request.url)
            .headers(request.headers)
            .send()?;

        Ok(RawResponse {
            status: response.status(),
            headers: response.headers().clone(),
            body: Box::new(response),
        })
    }
}
