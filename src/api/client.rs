//! HTTP transport for the Planfix REST API.

use std::time::{Duration, Instant};

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

use super::error::{ApiError, ApiResult};
use crate::config::{Config, ProbeEndpoint, ProbeMethod};

const USER_AGENT: &str = concat!("planfix-mcp/", env!("CARGO_PKG_VERSION"));

/// Shared handle to one Planfix account.
///
/// Cheap to share behind an `Arc`; the inner `reqwest::Client` pools
/// connections across concurrent calls.
#[derive(Debug, Clone)]
pub struct PlanfixClient {
    http: reqwest::Client,
    base_url: String,
    probe: ProbeEndpoint,
}

impl PlanfixClient {
    pub fn new(config: &Config) -> ApiResult<Self> {
        Self::with_timeout(config, config.timeout)
    }

    pub fn with_timeout(config: &Config, timeout: Duration) -> ApiResult<Self> {
        let _ = rustls::crypto::ring::default_provider().install_default();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| ApiError::validation("API key contains characters not allowed in a header"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            probe: config.probe.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET with query parameters.
    pub async fn get<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> ApiResult<Value> {
        let request = self.http.get(self.url(path)).query(query);
        self.send(Method::GET, path, request).await
    }

    /// POST with a JSON body.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Value> {
        let request = self.http.post(self.url(path)).json(body);
        self.send(Method::POST, path, request).await
    }

    async fn send(&self, method: Method, path: &str, request: RequestBuilder) -> ApiResult<Value> {
        let started = Instant::now();
        let response = request.send().await.map_err(|e| {
            warn!(%method, path, error = %e, "Planfix request failed");
            ApiError::from(e)
        })?;

        let status = response.status();
        debug!(
            %method,
            path,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Planfix API call"
        );

        let body = response.text().await?;
        if !status.is_success() {
            let err = ApiError::from_status(status.as_u16(), path, &body);
            warn!(%method, path, error = %err, "Planfix returned an error");
            return Err(err);
        }

        if body.trim().is_empty() {
            return Ok(json!({}));
        }
        serde_json::from_str(&body)
            .map_err(|e| ApiError::api(format!("API request failed: invalid JSON in response: {e}")))
    }

    /// One cheap call proving the credentials and the network path work.
    pub async fn probe(&self) -> ApiResult<()> {
        let path = self.probe.path.as_str();
        match self.probe.method {
            ProbeMethod::Get => self.get(path, &[("pageSize", 1)]).await?,
            ProbeMethod::Post => self.post(path, &json!({ "pageSize": 1 })).await?,
        };
        debug!(probe = %self.probe, "Planfix probe succeeded");
        Ok(())
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;
