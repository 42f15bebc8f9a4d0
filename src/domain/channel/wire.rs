//! Wire types for channel REST responses.

use serde::Deserialize;
use serde_json::Value;

use crate::shared::ChannelId;

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChannelResponse {
    pub id: ChannelId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub subscribers: Option<u64>,
    #[serde(default)]
    pub avg_views: Option<u64>,
    #[serde(default)]
    pub engagement_rate: Value,
    #[serde(default)]
    pub ad_formats: Vec<AdFormatResponse>,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AdFormatResponse {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub placement: Option<String>,
    #[serde(default)]
    pub price: Value,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChannelsResponse {
    pub channels: Vec<ChannelResponse>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
}
