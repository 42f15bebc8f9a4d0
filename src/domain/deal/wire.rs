//! Wire types for deal REST responses.
//!
//! Fields the backend is known to serialize inconsistently are typed as raw
//! [`serde_json::Value`] and coerced by the mappers; everything else
//! deserializes structurally with defaults so a partial payload never fails
//! the whole response.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use super::{AdFormatSummary, AdvertiserSummary, ChannelSummary};
use crate::shared::{BriefId, ChannelId, DealId, Role};

/// A deal record as the backend sends it.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawDeal {
    pub id: DealId,
    #[serde(default)]
    pub channel_id: Option<ChannelId>,
    #[serde(default)]
    pub brief_id: Option<BriefId>,
    /// Documented as a decimal string; observed as numbers too.
    #[serde(default)]
    pub agreed_price: Value,
    #[serde(default)]
    pub platform_fee_amount: Value,
    #[serde(default)]
    pub publisher_amount: Value,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub status: Value,
    /// Takes precedence over `status` when it normalizes to a known value.
    #[serde(default)]
    pub workflow_status: Value,
    #[serde(default)]
    pub escrow_status: Value,
    #[serde(default)]
    pub status_history: Value,
    #[serde(default)]
    pub available_actions: Value,
    #[serde(default)]
    pub deal_chat: Value,
    #[serde(default)]
    pub open_deal_chat_url: Option<String>,
    #[serde(default)]
    pub deadlines: Option<RawDeadlines>,
    #[serde(default)]
    pub posting_plan: Option<RawPostingPlan>,
    #[serde(default)]
    pub creative: Option<RawCreative>,
    #[serde(default)]
    pub channel: Option<ChannelSummary>,
    #[serde(default)]
    pub advertiser: Option<AdvertiserSummary>,
    #[serde(default)]
    pub ad_format: Option<AdFormatSummary>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawDeadlines {
    #[serde(default)]
    pub funding: Option<DateTime<Utc>>,
    #[serde(default)]
    pub creative: Option<DateTime<Utc>>,
    #[serde(default)]
    pub posting: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawPostingPlan {
    #[serde(default)]
    pub proposals: Vec<RawPostingPlanProposal>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawPostingPlanProposal {
    pub post_at: DateTime<Utc>,
    #[serde(default)]
    pub guarantee_hours: Option<u32>,
    #[serde(default)]
    pub proposed_by: Option<Role>,
    /// `pending | accepted | rejected | countered`; coerced leniently.
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawCreative {
    pub id: String,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub media: Vec<RawMediaAttachment>,
    #[serde(default)]
    pub inline_buttons: Vec<RawInlineButton>,
    #[serde(default)]
    pub feedback: Option<String>,
    /// `pending | approved | revision_requested`; coerced leniently.
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawMediaAttachment {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    pub url: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawInlineButton {
    pub text: String,
    pub url: String,
}

/// Paginated deal list response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DealsResponse {
    pub deals: Vec<RawDeal>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
}
