//! Brief domain — advertiser briefs seeking channel placements.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::BriefId;

/// Lifecycle of a brief.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BriefStatus {
    Draft,
    Open,
    Paused,
    Closed,
}

impl BriefStatus {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "DRAFT" => Some(Self::Draft),
            "OPEN" => Some(Self::Open),
            "PAUSED" => Some(Self::Paused),
            "CLOSED" => Some(Self::Closed),
            _ => None,
        }
    }
}

/// Audience targeting constraints on a brief.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefTargeting {
    pub categories: Vec<String>,
    pub languages: Vec<String>,
    pub min_subscribers: Option<u64>,
}

/// An advertiser's request for channel placements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brief {
    pub id: BriefId,
    pub title: String,
    pub description: String,
    pub status: BriefStatus,
    pub budget: Decimal,
    pub currency: String,
    pub ad_format: Option<String>,
    pub targeting: BriefTargeting,
    pub created_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}
