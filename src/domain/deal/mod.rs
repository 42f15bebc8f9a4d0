//! Deal domain — the workflow view model and every mapper that feeds it.
//!
//! A [`Deal`] is rebuilt from scratch out of each API response; nothing in
//! this module caches or mutates in place. All mappers degrade to safe
//! defaults on malformed upstream data instead of failing.

pub mod actions;
pub mod chat;
#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod finance;
pub mod history;
pub mod milestones;
pub mod status;
pub mod wire;

pub use actions::AvailableActions;
pub use chat::{DealChat, DealChatStatus};
pub use finance::{FinanceAmounts, NanoHeuristics};
pub use history::StatusHistoryEntry;
pub use milestones::{build_milestones, Milestone, MilestoneState};
pub use status::{BackendDealStatus, DealFilter, DealStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::coerce;
use crate::shared::{BriefId, ChannelId, DealId, Role};

// ─── Escrow ──────────────────────────────────────────────────────────────────

/// Escrow state, independent of the workflow status. Drives escrow badge
/// copy and coloring only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EscrowStatus {
    None,
    Pending,
    Held,
    Releasing,
    Refunding,
    PartialRefund,
    AwaitingPayment,
    Funded,
    Released,
    Refunded,
    Disputed,
}

impl EscrowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Pending => "PENDING",
            Self::Held => "HELD",
            Self::Releasing => "RELEASING",
            Self::Refunding => "REFUNDING",
            Self::PartialRefund => "PARTIAL_REFUND",
            Self::AwaitingPayment => "AWAITING_PAYMENT",
            Self::Funded => "FUNDED",
            Self::Released => "RELEASED",
            Self::Refunded => "REFUNDED",
            Self::Disputed => "DISPUTED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "NONE" => Some(Self::None),
            "PENDING" => Some(Self::Pending),
            "HELD" => Some(Self::Held),
            "RELEASING" => Some(Self::Releasing),
            "REFUNDING" => Some(Self::Refunding),
            "PARTIAL_REFUND" => Some(Self::PartialRefund),
            "AWAITING_PAYMENT" => Some(Self::AwaitingPayment),
            "FUNDED" => Some(Self::Funded),
            "RELEASED" => Some(Self::Released),
            "REFUNDED" => Some(Self::Refunded),
            "DISPUTED" => Some(Self::Disputed),
            _ => None,
        }
    }

    /// Coerce an arbitrary JSON value; anything unknown degrades to `None`.
    pub fn normalize(raw: &Value) -> Self {
        coerce::as_uppercase_str(raw)
            .as_deref()
            .and_then(Self::from_str)
            .unwrap_or(Self::None)
    }

    /// Escrow badge copy.
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "No escrow",
            Self::Pending => "Escrow pending",
            Self::Held => "Funds held",
            Self::Releasing => "Releasing funds",
            Self::Refunding => "Refunding",
            Self::PartialRefund => "Partially refunded",
            Self::AwaitingPayment => "Awaiting payment",
            Self::Funded => "Funded",
            Self::Released => "Funds released",
            Self::Refunded => "Refunded",
            Self::Disputed => "In dispute",
        }
    }
}

// ─── Creative ────────────────────────────────────────────────────────────────

/// Review state of the latest creative submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreativeStatus {
    Pending,
    Approved,
    RevisionRequested,
}

/// A media attachment on a creative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaAttachment {
    pub kind: String,
    pub url: String,
}

/// An inline keyboard button attached to the ad post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineButton {
    pub text: String,
    pub url: String,
}

/// The latest creative submission on a deal. Revision history is not retained
/// client-side beyond this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativeSubmission {
    pub id: String,
    pub submitted_at: Option<DateTime<Utc>>,
    pub text: String,
    pub media: Vec<MediaAttachment>,
    pub inline_buttons: Vec<InlineButton>,
    pub feedback: Option<String>,
    pub status: CreativeStatus,
}

// ─── Posting plan ────────────────────────────────────────────────────────────

/// Response state of one posting-plan proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalStatus {
    Pending,
    Accepted,
    Rejected,
    Countered,
}

/// One side's proposed posting date and guarantee term (hours the post must
/// stay live).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingPlanProposal {
    pub post_at: DateTime<Utc>,
    pub guarantee_hours: u32,
    pub proposed_by: Option<Role>,
    pub status: ProposalStatus,
}

/// The posting-plan negotiation between advertiser and publisher.
///
/// At most one proposal is pending a response at a time — a business
/// convention the server enforces, not this client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostingPlan {
    pub proposals: Vec<PostingPlanProposal>,
}

impl PostingPlan {
    /// The proposal currently awaiting a response, if any.
    pub fn pending(&self) -> Option<&PostingPlanProposal> {
        self.proposals.iter().find(|p| p.status == ProposalStatus::Pending)
    }

    /// The accepted proposal, if the negotiation has settled.
    pub fn agreed(&self) -> Option<&PostingPlanProposal> {
        self.proposals.iter().find(|p| p.status == ProposalStatus::Accepted)
    }
}

// ─── Deadlines ───────────────────────────────────────────────────────────────

/// Stage deadlines the backend attaches to a deal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deadlines {
    pub funding: Option<DateTime<Utc>>,
    pub creative: Option<DateTime<Utc>>,
    pub posting: Option<DateTime<Utc>>,
}

// ─── Counterparty summaries ──────────────────────────────────────────────────

/// Channel summary embedded in a deal payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSummary {
    pub id: ChannelId,
    pub title: String,
    pub username: Option<String>,
    #[serde(default)]
    pub subscribers: u64,
}

/// Advertiser summary embedded in a deal payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvertiserSummary {
    pub id: String,
    pub name: String,
}

/// Ad format summary embedded in a deal payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdFormatSummary {
    pub id: String,
    pub name: String,
    /// e.g. "1/24" — one post, 24 hours pinned.
    pub placement: Option<String>,
}

// ─── Deal ────────────────────────────────────────────────────────────────────

/// The UI-ready deal view model, assembled by `From<wire::RawDeal>`.
/// Output-only: the SDK never deserializes this shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: DealId,
    pub channel_id: Option<ChannelId>,
    pub brief_id: Option<BriefId>,
    /// Authoritative workflow state after normalization.
    pub backend_status: BackendDealStatus,
    /// UI mirror of `backend_status`, for display-label lookups.
    pub status: DealStatus,
    pub escrow_status: EscrowStatus,
    pub currency: String,
    pub finance: FinanceAmounts,
    pub milestones: Vec<Milestone>,
    pub actions: AvailableActions,
    pub history: Vec<StatusHistoryEntry>,
    pub deadlines: Deadlines,
    pub posting_plan: Option<PostingPlan>,
    pub creative: Option<CreativeSubmission>,
    pub chat: DealChat,
    pub open_chat_url: Option<String>,
    pub channel: Option<ChannelSummary>,
    pub advertiser: Option<AdvertiserSummary>,
    pub ad_format: Option<AdFormatSummary>,
}

impl Deal {
    pub fn is_terminal(&self) -> bool {
        self.backend_status.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escrow_normalize_fallback() {
        assert_eq!(EscrowStatus::normalize(&json!("held")), EscrowStatus::Held);
        assert_eq!(EscrowStatus::normalize(&json!("PARTIAL_REFUND")), EscrowStatus::PartialRefund);
        assert_eq!(EscrowStatus::normalize(&json!("whatever")), EscrowStatus::None);
        assert_eq!(EscrowStatus::normalize(&json!(null)), EscrowStatus::None);
    }

    #[test]
    fn test_posting_plan_pending_and_agreed() {
        let plan = PostingPlan {
            proposals: vec![
                PostingPlanProposal {
                    post_at: Utc::now(),
                    guarantee_hours: 24,
                    proposed_by: Some(Role::Publisher),
                    status: ProposalStatus::Rejected,
                },
                PostingPlanProposal {
                    post_at: Utc::now(),
                    guarantee_hours: 48,
                    proposed_by: Some(Role::Advertiser),
                    status: ProposalStatus::Pending,
                },
            ],
        };
        assert_eq!(plan.pending().unwrap().guarantee_hours, 48);
        assert!(plan.agreed().is_none());
    }
}
