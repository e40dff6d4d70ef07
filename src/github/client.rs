//! HTTP client for the upstream API

use crate::config::UpstreamConfig;
use crate::utils::error::{ProxyError, Result};
use bytes::Bytes;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::{Client, ClientBuilder, Method, StatusCode};
use std::fmt;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Opaque `Authorization` header value supplied by the caller
///
/// Never inspected or logged, only forwarded.
#[derive(Clone, Default)]
pub struct Credential(Option<Bytes>);

impl Credential {
    /// Wrap a raw header value; empty values count as absent
    pub fn new(value: Option<&[u8]>) -> Self {
        Self(
            value
                .filter(|value| !value.is_empty())
                .map(Bytes::copy_from_slice),
        )
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    fn header_value(&self) -> Result<Option<HeaderValue>> {
        self.0
            .as_ref()
            .map(|raw| {
                HeaderValue::from_bytes(raw)
                    .map(|mut value| {
                        value.set_sensitive(true);
                        value
                    })
                    .map_err(|_| ProxyError::bad_request("Invalid Authorization header"))
            })
            .transpose()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => f.write_str("Credential(<redacted>)"),
            None => f.write_str("Credential(None)"),
        }
    }
}

/// One outbound call, addressed by path segments below the base URL
#[derive(Debug, Clone)]
pub struct UpstreamRequest<'a> {
    method: Method,
    segments: Vec<&'a str>,
    query: Vec<(&'static str, String)>,
    body: Option<Bytes>,
    accept: Option<&'static str>,
}

impl<'a> UpstreamRequest<'a> {
    pub fn new(method: Method, segments: &[&'a str]) -> Self {
        Self {
            method,
            segments: segments.to_vec(),
            query: Vec::new(),
            body: None,
            accept: None,
        }
    }

    pub fn get(segments: &[&'a str]) -> Self {
        Self::new(Method::GET, segments)
    }

    pub fn put(segments: &[&'a str]) -> Self {
        Self::new(Method::PUT, segments)
    }

    pub fn patch(segments: &[&'a str]) -> Self {
        Self::new(Method::PATCH, segments)
    }

    pub fn delete(segments: &[&'a str]) -> Self {
        Self::new(Method::DELETE, segments)
    }

    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// JSON request body; empty bodies are not sent
    pub fn json_body(mut self, body: impl Into<Bytes>) -> Self {
        let body = body.into();
        self.body = (!body.is_empty()).then_some(body);
        self
    }

    pub fn accept(mut self, media_type: &'static str) -> Self {
        self.accept = Some(media_type);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }
}

/// Fully buffered upstream response
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl UpstreamResponse {
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }
}

/// Client for the upstream REST API
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: Url,
    page_size: u32,
}

impl GitHubClient {
    /// Build a client from configuration
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ProxyError::config(format!("Invalid upstream base URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ProxyError::config(format!(
                "Upstream base URL cannot be a base: {}",
                config.base_url
            )));
        }

        let mut builder = ClientBuilder::new().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| ProxyError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            page_size: config.invitations_page_size,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Page size used for paginated listings
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Absolute URL for the given path segments, each percent-encoded
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Execute a request, forwarding the caller's credential
    ///
    /// Only transport failures are errors; every HTTP status is returned to
    /// the caller to interpret.
    pub async fn execute(
        &self,
        request: UpstreamRequest<'_>,
        credential: &Credential,
    ) -> Result<UpstreamResponse> {
        let url = self.endpoint(&request.segments);
        debug!(method = %request.method, url = %url, "Calling upstream");

        let mut builder = self.http.request(request.method.clone(), url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(authorization) = credential.header_value()? {
            builder = builder.header(AUTHORIZATION, authorization);
        }
        if let Some(accept) = request.accept {
            builder = builder.header(ACCEPT, accept);
        }
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;

        debug!(method = %request.method, status = status.as_u16(), "Upstream responded");

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }

    /// Reachability check against the base URL, used by the readiness probe
    pub async fn probe(&self, timeout: Duration) -> Result<StatusCode> {
        let response = self
            .http
            .get(self.base_url.clone())
            .timeout(timeout)
            .send()
            .await?;
        Ok(response.status())
    }
}
