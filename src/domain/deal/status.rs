//! Deal workflow statuses — backend enum, UI mirror, filter table.
//!
//! The backend owns every transition; this module only classifies what it
//! reports. Unknown strings never propagate past [`BackendDealStatus::normalize`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::coerce;

// ─── Backend status ──────────────────────────────────────────────────────────

/// The authoritative workflow state, as the backend reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BackendDealStatus {
    Created,
    Negotiating,
    TermsProposed,
    TermsAgreed,
    AwaitingPayment,
    Funded,
    AwaitingCreative,
    CreativeSubmitted,
    CreativeRevision,
    CreativeApproved,
    AwaitingPostingPlan,
    PostingPlanAgreed,
    Scheduled,
    AwaitingManualPost,
    Posting,
    Posted,
    Verified,
    Completed,
    Cancelled,
    Expired,
    Refunded,
    Disputed,
    Resolved,
}

/// All statuses, in workflow order. Used for totality checks and the filter table.
pub const ALL_STATUSES: [BackendDealStatus; 23] = [
    BackendDealStatus::Created,
    BackendDealStatus::Negotiating,
    BackendDealStatus::TermsProposed,
    BackendDealStatus::TermsAgreed,
    BackendDealStatus::AwaitingPayment,
    BackendDealStatus::Funded,
    BackendDealStatus::AwaitingCreative,
    BackendDealStatus::CreativeSubmitted,
    BackendDealStatus::CreativeRevision,
    BackendDealStatus::CreativeApproved,
    BackendDealStatus::AwaitingPostingPlan,
    BackendDealStatus::PostingPlanAgreed,
    BackendDealStatus::Scheduled,
    BackendDealStatus::AwaitingManualPost,
    BackendDealStatus::Posting,
    BackendDealStatus::Posted,
    BackendDealStatus::Verified,
    BackendDealStatus::Completed,
    BackendDealStatus::Cancelled,
    BackendDealStatus::Expired,
    BackendDealStatus::Refunded,
    BackendDealStatus::Disputed,
    BackendDealStatus::Resolved,
];

/// Statuses after which the workflow never advances.
pub const TERMINAL_STATUSES: [BackendDealStatus; 5] = [
    BackendDealStatus::Completed,
    BackendDealStatus::Cancelled,
    BackendDealStatus::Expired,
    BackendDealStatus::Refunded,
    BackendDealStatus::Resolved,
];

impl BackendDealStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Negotiating => "NEGOTIATING",
            Self::TermsProposed => "TERMS_PROPOSED",
            Self::TermsAgreed => "TERMS_AGREED",
            Self::AwaitingPayment => "AWAITING_PAYMENT",
            Self::Funded => "FUNDED",
            Self::AwaitingCreative => "AWAITING_CREATIVE",
            Self::CreativeSubmitted => "CREATIVE_SUBMITTED",
            Self::CreativeRevision => "CREATIVE_REVISION",
            Self::CreativeApproved => "CREATIVE_APPROVED",
            Self::AwaitingPostingPlan => "AWAITING_POSTING_PLAN",
            Self::PostingPlanAgreed => "POSTING_PLAN_AGREED",
            Self::Scheduled => "SCHEDULED",
            Self::AwaitingManualPost => "AWAITING_MANUAL_POST",
            Self::Posting => "POSTING",
            Self::Posted => "POSTED",
            Self::Verified => "VERIFIED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::Expired => "EXPIRED",
            Self::Refunded => "REFUNDED",
            Self::Disputed => "DISPUTED",
            Self::Resolved => "RESOLVED",
        }
    }

    /// Match an uppercased status string. `None` for anything unknown.
    pub fn from_str(s: &str) -> Option<Self> {
        ALL_STATUSES.iter().copied().find(|st| st.as_str() == s)
    }

    /// Coerce an arbitrary JSON value into a known status.
    ///
    /// Strings match case-insensitively; everything else (and unknown
    /// strings) degrades to `fallback`. Never fails — this is the single
    /// choke point that keeps malformed server strings out of the milestone
    /// and action logic.
    pub fn normalize(raw: &Value, fallback: BackendDealStatus) -> BackendDealStatus {
        match coerce::as_uppercase_str(raw).as_deref().and_then(Self::from_str) {
            Some(status) => status,
            None => {
                if !raw.is_null() {
                    tracing::debug!(?raw, fallback = fallback.as_str(), "unknown deal status, using fallback");
                }
                fallback
            }
        }
    }

    pub fn is_terminal(&self) -> bool {
        TERMINAL_STATUSES.contains(self)
    }
}

impl std::fmt::Display for BackendDealStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── UI status ───────────────────────────────────────────────────────────────

/// Lowercase-snake-case mirror of [`BackendDealStatus`], used for display-label
/// lookups. The mapping is total and bijective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealStatus {
    Created,
    Negotiating,
    TermsProposed,
    TermsAgreed,
    AwaitingPayment,
    Funded,
    AwaitingCreative,
    CreativeSubmitted,
    CreativeRevision,
    CreativeApproved,
    AwaitingPostingPlan,
    PostingPlanAgreed,
    Scheduled,
    AwaitingManualPost,
    Posting,
    Posted,
    Verified,
    Completed,
    Cancelled,
    Expired,
    Refunded,
    Disputed,
    Resolved,
}

impl From<BackendDealStatus> for DealStatus {
    fn from(s: BackendDealStatus) -> Self {
        match s {
            BackendDealStatus::Created => DealStatus::Created,
            BackendDealStatus::Negotiating => DealStatus::Negotiating,
            BackendDealStatus::TermsProposed => DealStatus::TermsProposed,
            BackendDealStatus::TermsAgreed => DealStatus::TermsAgreed,
            BackendDealStatus::AwaitingPayment => DealStatus::AwaitingPayment,
            BackendDealStatus::Funded => DealStatus::Funded,
            BackendDealStatus::AwaitingCreative => DealStatus::AwaitingCreative,
            BackendDealStatus::CreativeSubmitted => DealStatus::CreativeSubmitted,
            BackendDealStatus::CreativeRevision => DealStatus::CreativeRevision,
            BackendDealStatus::CreativeApproved => DealStatus::CreativeApproved,
            BackendDealStatus::AwaitingPostingPlan => DealStatus::AwaitingPostingPlan,
            BackendDealStatus::PostingPlanAgreed => DealStatus::PostingPlanAgreed,
            BackendDealStatus::Scheduled => DealStatus::Scheduled,
            BackendDealStatus::AwaitingManualPost => DealStatus::AwaitingManualPost,
            BackendDealStatus::Posting => DealStatus::Posting,
            BackendDealStatus::Posted => DealStatus::Posted,
            BackendDealStatus::Verified => DealStatus::Verified,
            BackendDealStatus::Completed => DealStatus::Completed,
            BackendDealStatus::Cancelled => DealStatus::Cancelled,
            BackendDealStatus::Expired => DealStatus::Expired,
            BackendDealStatus::Refunded => DealStatus::Refunded,
            BackendDealStatus::Disputed => DealStatus::Disputed,
            BackendDealStatus::Resolved => DealStatus::Resolved,
        }
    }
}

impl DealStatus {
    /// Badge copy shown on deal cards.
    pub fn label(&self) -> &'static str {
        match self {
            DealStatus::Created => "Created",
            DealStatus::Negotiating => "Negotiating",
            DealStatus::TermsProposed => "Terms proposed",
            DealStatus::TermsAgreed => "Terms agreed",
            DealStatus::AwaitingPayment => "Awaiting payment",
            DealStatus::Funded => "Funded",
            DealStatus::AwaitingCreative => "Awaiting creative",
            DealStatus::CreativeSubmitted => "Creative submitted",
            DealStatus::CreativeRevision => "Revision requested",
            DealStatus::CreativeApproved => "Creative approved",
            DealStatus::AwaitingPostingPlan => "Awaiting posting plan",
            DealStatus::PostingPlanAgreed => "Posting plan agreed",
            DealStatus::Scheduled => "Scheduled",
            DealStatus::AwaitingManualPost => "Awaiting manual post",
            DealStatus::Posting => "Posting",
            DealStatus::Posted => "Posted",
            DealStatus::Verified => "Verified",
            DealStatus::Completed => "Completed",
            DealStatus::Cancelled => "Cancelled",
            DealStatus::Expired => "Expired",
            DealStatus::Refunded => "Refunded",
            DealStatus::Disputed => "Disputed",
            DealStatus::Resolved => "Resolved",
        }
    }
}

// ─── Filter table ────────────────────────────────────────────────────────────

/// Deal list filter tabs, each mapped to a fixed backend status set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealFilter {
    All,
    Negotiation,
    Payment,
    Creative,
    Posting,
    Completed,
    Terminated,
}

impl DealFilter {
    /// Backend statuses queried for this tab. `All` returns the empty slice,
    /// meaning "no status constraint" on the list endpoint.
    pub fn backend_statuses(&self) -> &'static [BackendDealStatus] {
        use BackendDealStatus as S;
        match self {
            DealFilter::All => &[],
            DealFilter::Negotiation => &[S::Created, S::Negotiating, S::TermsProposed, S::TermsAgreed],
            DealFilter::Payment => &[S::AwaitingPayment, S::Funded],
            DealFilter::Creative => &[
                S::AwaitingCreative,
                S::CreativeSubmitted,
                S::CreativeRevision,
                S::CreativeApproved,
            ],
            DealFilter::Posting => &[
                S::AwaitingPostingPlan,
                S::PostingPlanAgreed,
                S::Scheduled,
                S::AwaitingManualPost,
                S::Posting,
                S::Posted,
                S::Verified,
            ],
            DealFilter::Completed => &[S::Completed],
            DealFilter::Terminated => &[S::Cancelled, S::Expired, S::Refunded, S::Disputed, S::Resolved],
        }
    }
}
