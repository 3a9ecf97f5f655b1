//! The transport seam: API operations describe a request, an [`HttpExecutor`]
//! performs it.

use std::future::Future;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::Method;
use serde_json::Value;
use tracing::trace;
use url::Url;

use crate::error::TransportError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub base_url: Url,
    /// Absolute path such as `/vacancies/42`.
    pub path: String,
    /// Either empty or a full `?a=b` query string.
    pub query: String,
    pub headers: HeaderMap,
}

impl HttpRequest {
    pub fn get(
        base_url: &Url,
        path: impl Into<String>,
        query: impl Into<String>,
        headers: HeaderMap,
    ) -> Self {
        Self {
            method: Method::GET,
            base_url: base_url.clone(),
            path: path.into(),
            query: query.into(),
            headers,
        }
    }

    pub fn url(&self) -> Result<Url, url::ParseError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&concat_str!(base, self.path, self.query))
    }
}

/// Status line and decoded body. Error bodies that are not JSON decode to `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: String,
    pub body: Value,
}

pub trait HttpExecutor: Send + Sync {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// [`HttpExecutor`] over a pooled `reqwest::Client`. Performs no retries.
#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    client: reqwest::Client,
}

impl ReqwestExecutor {
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpExecutor for ReqwestExecutor {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = request.url()?;
        trace!(%url, "sending request");

        let response = self
            .client
            .request(request.method, url)
            .headers(request.headers)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else if status.is_success() {
            serde_json::from_slice(&bytes)?
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        Ok(HttpResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
