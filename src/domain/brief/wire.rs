//! Wire types for brief REST responses.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::shared::BriefId;

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BriefResponse {
    pub id: BriefId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Value,
    /// Decimal string in the documented schema, numbers in practice.
    #[serde(default)]
    pub budget: Value,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub ad_format: Option<String>,
    #[serde(default)]
    pub targeting: Option<BriefTargetingResponse>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BriefTargetingResponse {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub min_subscribers: Option<u64>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BriefsResponse {
    pub briefs: Vec<BriefResponse>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
}
