//! Milestone timeline — maps the workflow status onto the seven fixed stages
//! shown on the deal screen.
//!
//! The workflow is strictly ordered but has two escape hatches that do not
//! fit a linear index: completion (everything done) and the terminal
//! non-completed statuses (timeline frozen at the last stage the deal
//! actually reached). Both are special-cased here instead of being forced
//! through the ordinary active/done boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::history::{self, StatusHistoryEntry};
use super::status::BackendDealStatus;

/// Progress state of a single milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneState {
    Done,
    Active,
    Upcoming,
}

/// One entry of the seven-stage deal timeline. Output-only: built from a
/// status + history, never read back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Milestone {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// When the stage completed, from the earliest matching history entry.
    /// `None` for active and upcoming stages (and for done stages the
    /// backend never logged).
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(rename = "status")]
    pub state: MilestoneState,
}

struct MilestoneDef {
    id: &'static str,
    label: &'static str,
    description: &'static str,
    statuses: &'static [BackendDealStatus],
}

const MILESTONE_COUNT: usize = 7;

/// Fixed stage definitions, in timeline order. Each backend status belongs to
/// exactly one stage; terminal statuses (other than `Disputed`, which renders
/// under completion) are resolved through history instead.
const MILESTONE_DEFINITIONS: [MilestoneDef; MILESTONE_COUNT] = {
    use BackendDealStatus as S;
    [
        MilestoneDef {
            id: "created",
            label: "Deal created",
            description: "The deal was opened from a brief response",
            statuses: &[S::Created],
        },
        MilestoneDef {
            id: "terms",
            label: "Terms agreed",
            description: "Both sides settled on price and placement terms",
            statuses: &[S::Negotiating, S::TermsProposed, S::TermsAgreed],
        },
        MilestoneDef {
            id: "payment",
            label: "Payment secured",
            description: "The advertiser funded escrow",
            statuses: &[S::AwaitingPayment, S::Funded],
        },
        MilestoneDef {
            id: "creative",
            label: "Creative approved",
            description: "The ad creative was submitted and approved",
            statuses: &[
                S::AwaitingCreative,
                S::CreativeSubmitted,
                S::CreativeRevision,
                S::CreativeApproved,
            ],
        },
        MilestoneDef {
            id: "posting-plan",
            label: "Posting plan agreed",
            description: "Posting date and guarantee term were settled",
            statuses: &[S::AwaitingPostingPlan, S::PostingPlanAgreed, S::Scheduled],
        },
        MilestoneDef {
            id: "publication",
            label: "Published",
            description: "The post went live on the channel",
            statuses: &[S::AwaitingManualPost, S::Posting, S::Posted, S::Verified],
        },
        MilestoneDef {
            id: "completion",
            label: "Completed",
            description: "Escrow settled and the deal closed",
            statuses: &[S::Completed, S::Disputed],
        },
    ]
};

/// First-match stage index for a status; unmatched statuses default to 0.
fn stage_index_for_status(status: BackendDealStatus) -> usize {
    MILESTONE_DEFINITIONS
        .iter()
        .position(|def| def.statuses.contains(&status))
        .unwrap_or(0)
}

/// Build the seven-milestone timeline for a deal.
///
/// - `Completed`: every stage is done.
/// - Other terminal statuses: the timeline freezes at the stage of the most
///   recent non-terminal history entry (stage 0 when the history is empty or
///   all-terminal); nothing is active.
/// - Everything else: stages below the current one are done, the current one
///   is active, the rest upcoming.
pub fn build_milestones(
    status: BackendDealStatus,
    history: &[StatusHistoryEntry],
) -> Vec<Milestone> {
    let completed = status == BackendDealStatus::Completed;
    let frozen = status.is_terminal() && !completed;

    let current_index = if completed {
        MILESTONE_COUNT - 1
    } else if frozen {
        history::last_non_terminal(history)
            .map(|e| stage_index_for_status(e.status))
            .unwrap_or(0)
    } else {
        stage_index_for_status(status)
    };

    MILESTONE_DEFINITIONS
        .iter()
        .enumerate()
        .map(|(index, def)| {
            let state = if completed {
                MilestoneState::Done
            } else if frozen {
                if index <= current_index {
                    MilestoneState::Done
                } else {
                    MilestoneState::Upcoming
                }
            } else if index < current_index {
                MilestoneState::Done
            } else if index == current_index {
                MilestoneState::Active
            } else {
                MilestoneState::Upcoming
            };

            let timestamp = match state {
                MilestoneState::Done => {
                    history::earliest_matching(history, def.statuses).map(|e| e.timestamp)
                }
                _ => None,
            };

            Milestone {
                id: def.id,
                label: def.label,
                description: def.description,
                timestamp,
                state,
            }
        })
        .collect()
}
