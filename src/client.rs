//! High-level client — `AdMarketClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared cache state, and accessor methods.

use crate::domain::brief::client::Briefs;
use crate::domain::channel::client::Channels;
use crate::domain::channel::Channel;
use crate::domain::deal::client::Deals;
use crate::error::SdkError;
use crate::http::AdMarketHttp;

use async_lock::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

// Re-export sub-client types for convenience.
pub use crate::domain::brief::client::Briefs as BriefsClient;
pub use crate::domain::channel::client::Channels as ChannelsClient;
pub use crate::domain::deal::client::Deals as DealsClient;

/// The primary entry point for the AdMarket SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.deals()`, `client.briefs()`, `client.channels()`.
pub struct AdMarketClient {
    pub(crate) http: AdMarketHttp,
    /// Channel cache: id → (Channel, fetched_at). Deals are never cached —
    /// the view model is rebuilt from every response.
    pub(crate) channel_cache: Arc<RwLock<HashMap<String, (Channel, Instant)>>>,
    /// Cache TTL for channels.
    pub(crate) channel_cache_ttl: Duration,
}

impl AdMarketClient {
    pub fn builder() -> AdMarketClientBuilder {
        AdMarketClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn deals(&self) -> Deals<'_> {
        Deals { client: self }
    }

    pub fn briefs(&self) -> Briefs<'_> {
        Briefs { client: self }
    }

    pub fn channels(&self) -> Channels<'_> {
        Channels { client: self }
    }

    /// Replace the Telegram `initData` credential (e.g. after the Mini App
    /// refreshes its session).
    pub async fn set_init_data(&self, init_data: impl Into<String>) {
        self.http.set_init_data(Some(init_data.into())).await;
    }

    /// Drop the credential; subsequent requests go out unauthenticated.
    pub async fn clear_init_data(&self) {
        self.http.clear_init_data().await;
    }

    /// Clear all HTTP caches.
    pub async fn clear_all_caches(&self) {
        self.channel_cache.write().await.clear();
    }
}

impl Clone for AdMarketClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            channel_cache: self.channel_cache.clone(),
            channel_cache_ttl: self.channel_cache_ttl,
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct AdMarketClientBuilder {
    base_url: String,
    channel_cache_ttl: Duration,
    init_data: Option<String>,
}

impl Default for AdMarketClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            channel_cache_ttl: Duration::from_secs(300),
            init_data: None,
        }
    }
}

impl AdMarketClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn channel_cache_ttl(mut self, ttl: Duration) -> Self {
        self.channel_cache_ttl = ttl;
        self
    }

    /// Pre-set the Telegram WebApp `initData` credential on construction.
    pub fn init_data(mut self, init_data: impl Into<String>) -> Self {
        self.init_data = Some(init_data.into());
        self
    }

    pub fn build(self) -> Result<AdMarketClient, SdkError> {
        Ok(AdMarketClient {
            http: AdMarketHttp::with_init_data(&self.base_url, self.init_data),
            channel_cache: Arc::new(RwLock::new(HashMap::new())),
            channel_cache_ttl: self.channel_cache_ttl,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builder_defaults() {
        let client = AdMarketClient::builder().build().unwrap();
        assert_eq!(client.channel_cache_ttl, Duration::from_secs(300));
        assert!(client.channel_cache.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_builder_with_init_data_and_custom_url() {
        let client = AdMarketClient::builder()
            .base_url("https://staging-api.admarket.app")
            .init_data("query_id=abc&user=...")
            .channel_cache_ttl(Duration::from_secs(60))
            .build()
            .unwrap();
        assert_eq!(client.channel_cache_ttl, Duration::from_secs(60));
        // sub-clients are constructible
        let _ = client.deals();
        let _ = client.briefs();
        let _ = client.channels();
    }
}
