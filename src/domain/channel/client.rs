//! Channels sub-client — fetch, search, cache.
//!
//! Channel metadata moves slowly, so reads go through the client's TTL cache.

use std::time::Instant;

use super::Channel;
use crate::client::AdMarketClient;
use crate::error::SdkError;
use crate::shared::ChannelId;

/// Sub-client for channel operations.
pub struct Channels<'a> {
    pub(crate) client: &'a AdMarketClient,
}

impl<'a> Channels<'a> {
    /// Get a channel by id. Uses the TTL cache.
    pub async fn get(&self, channel_id: &ChannelId) -> Result<Channel, SdkError> {
        {
            let cache = self.client.channel_cache.read().await;
            if let Some((channel, fetched_at)) = cache.get(channel_id.as_str()) {
                if fetched_at.elapsed() < self.client.channel_cache_ttl {
                    return Ok(channel.clone());
                }
            }
        }

        let raw = self.client.http.get_channel(channel_id.as_str()).await?;
        let channel = Channel::from(raw);
        self.cache_channel(&channel).await;
        Ok(channel)
    }

    /// List channels (uncached — the listing endpoint paginates and sorts
    /// server-side).
    pub async fn list(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Vec<Channel>, SdkError> {
        let resp = self.client.http.get_channels(page, limit).await?;
        Ok(resp.channels.into_iter().map(Channel::from).collect())
    }

    /// Search channels by title or username.
    pub async fn search(
        &self,
        query: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Channel>, SdkError> {
        let raw = self.client.http.search_channels(query, limit).await?;
        Ok(raw.into_iter().map(Channel::from).collect())
    }

    /// Invalidate a cached channel.
    pub async fn invalidate(&self, channel_id: &ChannelId) {
        self.client
            .channel_cache
            .write()
            .await
            .remove(channel_id.as_str());
    }

    /// Clear the channel cache.
    pub async fn clear_cache(&self) {
        self.client.channel_cache.write().await.clear();
    }

    async fn cache_channel(&self, channel: &Channel) {
        self.client
            .channel_cache
            .write()
            .await
            .insert(channel.id.to_string(), (channel.clone(), Instant::now()));
    }
}
