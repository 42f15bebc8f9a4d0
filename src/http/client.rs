//! Low-level HTTP client — `AdMarketHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain
//! types happens at the sub-client boundary). Internal to the SDK — the
//! high-level `AdMarketClient` wraps this.

use crate::domain::brief::wire::{BriefResponse, BriefsResponse};
use crate::domain::channel::wire::{ChannelResponse, ChannelsResponse};
use crate::domain::deal::wire::{DealsResponse, RawDeal};
use crate::domain::deal::DealFilter;
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::shared::Role;

use async_lock::RwLock;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Low-level HTTP client for the AdMarket REST API.
pub struct AdMarketHttp {
    base_url: String,
    client: Client,
    /// Telegram Mini App `initData`, sent as `Authorization: tma <initData>`.
    /// NEVER exposed publicly.
    init_data: Arc<RwLock<Option<String>>>,
}

impl AdMarketHttp {
    pub fn new(base_url: &str) -> Self {
        Self::with_init_data(base_url, None)
    }

    pub(crate) fn with_init_data(base_url: &str, init_data: Option<String>) -> Self {
        let builder = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            init_data: Arc::new(RwLock::new(init_data)),
        }
    }

    /// Set the Telegram `initData` credential used for every request.
    pub(crate) async fn set_init_data(&self, init_data: Option<String>) {
        *self.init_data.write().await = init_data;
    }

    /// Clear the credential.
    pub(crate) async fn clear_init_data(&self) {
        *self.init_data.write().await = None;
    }

    // ── Deals ────────────────────────────────────────────────────────────

    pub async fn get_deals(
        &self,
        filter: DealFilter,
        role: Option<Role>,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<DealsResponse, HttpError> {
        let mut url = format!("{}/api/deals", self.base_url);
        let mut params = Vec::new();
        let statuses = filter.backend_statuses();
        if !statuses.is_empty() {
            let joined = statuses
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(",");
            params.push(format!("status={}", urlencoding::encode(&joined)));
        }
        if let Some(r) = role {
            params.push(format!("role={}", r.to_string().to_lowercase()));
        }
        if let Some(p) = page {
            params.push(format!("page={}", p));
        }
        if let Some(l) = limit {
            params.push(format!("limit={}", l));
        }
        if !params.is_empty() {
            url = format!("{}?{}", url, params.join("&"));
        }
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_deal(&self, deal_id: &str) -> Result<RawDeal, HttpError> {
        let url = format!("{}/api/deals/{}", self.base_url, deal_id);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    /// POST one of the deal workflow actions. Every action returns the
    /// updated deal record. Mutations never retry.
    pub async fn post_deal_action<B: Serialize>(
        &self,
        deal_id: &str,
        action: &str,
        body: &B,
    ) -> Result<RawDeal, HttpError> {
        let url = format!("{}/api/deals/{}/{}", self.base_url, deal_id, action);
        self.post(&url, body, RetryPolicy::None).await
    }

    // ── Briefs ───────────────────────────────────────────────────────────

    pub async fn get_briefs(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<BriefsResponse, HttpError> {
        let mut url = format!("{}/api/briefs", self.base_url);
        let mut params = Vec::new();
        if let Some(p) = page {
            params.push(format!("page={}", p));
        }
        if let Some(l) = limit {
            params.push(format!("limit={}", l));
        }
        if !params.is_empty() {
            url = format!("{}?{}", url, params.join("&"));
        }
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_brief(&self, brief_id: &str) -> Result<BriefResponse, HttpError> {
        let url = format!("{}/api/briefs/{}", self.base_url, brief_id);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn create_brief<B: Serialize>(&self, body: &B) -> Result<BriefResponse, HttpError> {
        let url = format!("{}/api/briefs", self.base_url);
        self.post(&url, body, RetryPolicy::None).await
    }

    pub async fn close_brief(&self, brief_id: &str) -> Result<BriefResponse, HttpError> {
        let url = format!("{}/api/briefs/{}/close", self.base_url, brief_id);
        self.post(&url, &serde_json::json!({}), RetryPolicy::None)
            .await
    }

    // ── Channels ─────────────────────────────────────────────────────────

    pub async fn get_channels(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<ChannelsResponse, HttpError> {
        let mut url = format!("{}/api/channels", self.base_url);
        let mut params = Vec::new();
        if let Some(p) = page {
            params.push(format!("page={}", p));
        }
        if let Some(l) = limit {
            params.push(format!("limit={}", l));
        }
        if !params.is_empty() {
            url = format!("{}?{}", url, params.join("&"));
        }
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_channel(&self, channel_id: &str) -> Result<ChannelResponse, HttpError> {
        let url = format!("{}/api/channels/{}", self.base_url, channel_id);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn search_channels(
        &self,
        query: &str,
        limit: Option<u32>,
    ) -> Result<Vec<ChannelResponse>, HttpError> {
        let mut url = format!(
            "{}/api/channels/search?q={}",
            self.base_url,
            urlencoding::encode(query)
        );
        if let Some(l) = limit {
            url = format!("{}&limit={}", url, l);
        }
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::GET, url, None::<&()>, retry)
            .await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::POST, url, Some(body), retry)
            .await
    }

    async fn request_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match &retry {
            RetryPolicy::None => {
                return self.do_request(&method, url, body).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T, B>(&method, url, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            true
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method.clone(), url);

        if let Some(init_data) = self.init_data.read().await.as_ref() {
            req = req.header("Authorization", format!("tma {}", init_data));
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
            .map(|secs| secs * 1000);
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited { retry_after_ms }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

impl Clone for AdMarketHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            init_data: self.init_data.clone(),
        }
    }
}
