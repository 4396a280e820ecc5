//! HTTP transport with rate limiting.
//!
//! Repositories depend on the narrow [`Transport`] contract only: execute a
//! request, hand back the body text or a failure. Status-code policy lives
//! here; the callers never branch on status beyond the returned error kind.

use std::num::NonZeroU32;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::direct::NotKeyed;
use governor::state::InMemoryState;
use governor::{Quota, RateLimiter};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response};
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::infrastructure::config::HttpClientConfig;

/// Executes requests and returns raw body text.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET the URL and return its body.
    async fn get_text(&self, url: &str) -> CatalogResult<String>;

    /// POST a JSON body to the URL and return the response body.
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> CatalogResult<String>;
}

/// Rate-limited `reqwest` wrapper.
pub struct HttpClient {
    client: Client,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    config: HttpClientConfig,
}

impl HttpClient {
    pub fn new(config: HttpClientConfig) -> CatalogResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| CatalogError::configuration(format!("invalid user agent: {e}")))?,
        );
        if let Some(token) = &config.bearer_token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
                    CatalogError::configuration(format!("invalid bearer token: {e}"))
                })?,
            );
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_headers(headers)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(10)
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()
            .map_err(|e| CatalogError::configuration(format!("client build failed: {e}")))?;

        let quota = Quota::per_second(
            NonZeroU32::new(config.max_requests_per_second)
                .ok_or_else(|| CatalogError::configuration("rate limit must be greater than 0"))?,
        );

        Ok(Self {
            client,
            rate_limiter: RateLimiter::direct(quota),
            config,
        })
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    async fn read_body(url: &str, response: Response) -> CatalogResult<String> {
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::http_status(url, status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| CatalogError::transport(url, e))?;
        if text.trim().is_empty() {
            return Err(CatalogError::empty_body(url));
        }

        debug!("fetched {url} ({} chars)", text.len());
        Ok(text)
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn get_text(&self, url: &str) -> CatalogResult<String> {
        self.rate_limiter.until_ready().await;
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::transport(url, e))?;
        Self::read_body(url, response).await
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> CatalogResult<String> {
        self.rate_limiter.until_ready().await;
        debug!("POST {url}");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| CatalogError::transport(url, e))?;
        Self::read_body(url, response).await
    }
}
