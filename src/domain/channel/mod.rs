//! Channel domain — publisher channels and their listed ad inventory.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::ChannelId;

/// One ad format a channel offers, with its listed price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdFormatListing {
    pub id: String,
    pub name: String,
    /// e.g. "1/24" — one post, 24 hours pinned.
    pub placement: Option<String>,
    pub price: Decimal,
    pub currency: String,
}

/// Audience statistics the marketplace surfaces on channel cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStats {
    pub subscribers: u64,
    pub avg_views: u64,
    /// Engagement rate in percent, if the backend computed one.
    pub engagement_rate: Option<Decimal>,
}

/// A publisher channel listed on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: ChannelId,
    pub title: String,
    pub username: Option<String>,
    pub description: String,
    pub category: Option<String>,
    pub language: Option<String>,
    pub stats: ChannelStats,
    pub ad_formats: Vec<AdFormatListing>,
    pub verified: bool,
}
