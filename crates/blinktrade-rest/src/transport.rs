//! HTTP transport abstraction
//!
//! The endpoints never talk to `reqwest` directly. They go through
//! [`HttpTransport`], which keeps them testable against canned JSON
//! responses without real network calls.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::{RestError, RestResult};

/// A header name and value
pub type Header = (&'static str, String);

/// Trait for HTTP transport abstraction
///
/// Implementations issue exactly one request per call and return the decoded
/// JSON body. Failures are reported as-is, with no retry.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// GET `url` and decode the JSON body
    async fn get_json(&self, url: &str) -> RestResult<Value>;

    /// POST `body` as JSON to `url` with extra `headers` and decode the JSON body
    async fn post_json(&self, url: &str, headers: &[Header], body: &Value) -> RestResult<Value>;
}

/// Real transport using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with the configured timeout and user agent
    pub fn new(config: &ClientConfig) -> RestResult<Self> {
        let client = client_builder(config).build()?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

fn client_builder(config: &ClientConfig) -> reqwest::ClientBuilder {
    Client::builder()
        .timeout(config.timeout())
        .user_agent(config.user_agent())
}

fn map_reqwest_error(err: reqwest::Error) -> RestError {
    if err.is_timeout() {
        RestError::Timeout
    } else {
        RestError::Http(err)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self))]
    async fn get_json(&self, url: &str) -> RestResult<Value> {
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        debug!(status = %response.status(), "GET response");

        response.json().await.map_err(map_reqwest_error)
    }

    #[instrument(skip(self, headers, body))]
    async fn post_json(&self, url: &str, headers: &[Header], body: &Value) -> RestResult<Value> {
        // `json` sets Content-Type; `header` appends, so callers must not repeat it
        let mut request = self.client.post(url).json(body);
        for (name, value) in headers {
            request = request.header(*name, value.as_str());
        }

        let response = request.send().await.map_err(map_reqwest_error)?;
        debug!(status = %response.status(), "POST response");

        response.json().await.map_err(map_reqwest_error)
    }
}
