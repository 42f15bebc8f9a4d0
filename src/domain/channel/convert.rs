//! Conversion: ChannelResponse → Channel.

use rust_decimal::Decimal;

use super::wire;
use super::{AdFormatListing, Channel, ChannelStats};
use crate::shared::coerce;

impl From<wire::ChannelResponse> for Channel {
    fn from(raw: wire::ChannelResponse) -> Self {
        Channel {
            id: raw.id,
            title: raw.title.unwrap_or_default(),
            username: raw.username,
            description: raw.description.unwrap_or_default(),
            category: raw.category,
            language: raw.language,
            stats: ChannelStats {
                subscribers: raw.subscribers.unwrap_or(0),
                avg_views: raw.avg_views.unwrap_or(0),
                engagement_rate: coerce::as_decimal(&raw.engagement_rate),
            },
            ad_formats: raw.ad_formats.into_iter().map(AdFormatListing::from).collect(),
            verified: raw.verified,
        }
    }
}

impl From<wire::AdFormatResponse> for AdFormatListing {
    fn from(raw: wire::AdFormatResponse) -> Self {
        AdFormatListing {
            id: raw.id,
            name: raw.name.unwrap_or_default(),
            placement: raw.placement,
            price: coerce::as_decimal(&raw.price).unwrap_or(Decimal::ZERO),
            currency: raw.currency.unwrap_or_else(|| "TON".to_string()),
        }
    }
}
