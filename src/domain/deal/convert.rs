//! Conversion: RawDeal → Deal.
//!
//! Total by design: a deal screen with fallback values beats a failed screen,
//! so this conversion is `From`, not `TryFrom`. Per-field degradation rules
//! live in the individual mappers.

use rust_decimal::Decimal;

use super::wire;
use super::{
    build_milestones, AvailableActions, BackendDealStatus, CreativeStatus, CreativeSubmission,
    Deadlines, Deal, DealChat, DealStatus, EscrowStatus, FinanceAmounts, InlineButton,
    MediaAttachment, PostingPlan, PostingPlanProposal, ProposalStatus,
};
use crate::domain::deal::finance;
use crate::domain::deal::history::parse_status_history;
use crate::shared::coerce;

impl From<wire::RawDeal> for Deal {
    fn from(raw: wire::RawDeal) -> Self {
        // `workflowStatus` is the newer field; fall through to `status`, then
        // to CREATED when neither normalizes.
        let from_status = BackendDealStatus::normalize(&raw.status, BackendDealStatus::Created);
        let backend_status = BackendDealStatus::normalize(&raw.workflow_status, from_status);

        let history = parse_status_history(&raw.status_history);
        let milestones = build_milestones(backend_status, &history);
        let actions = AvailableActions::from_raw(Some(&raw.available_actions));
        let chat = DealChat::from_raw(Some(&raw.deal_chat), backend_status);
        let escrow_status = EscrowStatus::normalize(&raw.escrow_status);

        let currency = raw.currency.unwrap_or_else(|| "TON".to_string());
        let amounts = FinanceAmounts {
            agreed_price: coerce::as_decimal(&raw.agreed_price).unwrap_or(Decimal::ZERO),
            platform_fee_amount: coerce::as_decimal(&raw.platform_fee_amount)
                .unwrap_or(Decimal::ZERO),
            publisher_amount: coerce::as_decimal(&raw.publisher_amount).unwrap_or(Decimal::ZERO),
        };
        let finance = if currency.eq_ignore_ascii_case("TON") {
            finance::normalize_ton_amounts(amounts)
        } else {
            amounts
        };

        Deal {
            id: raw.id,
            channel_id: raw.channel_id,
            brief_id: raw.brief_id,
            backend_status,
            status: DealStatus::from(backend_status),
            escrow_status,
            currency,
            finance,
            milestones,
            actions,
            history,
            deadlines: raw.deadlines.map(Deadlines::from).unwrap_or_default(),
            posting_plan: raw.posting_plan.map(PostingPlan::from),
            creative: raw.creative.map(CreativeSubmission::from),
            chat,
            open_chat_url: raw.open_deal_chat_url,
            channel: raw.channel,
            advertiser: raw.advertiser,
            ad_format: raw.ad_format,
        }
    }
}

impl From<wire::RawDeadlines> for Deadlines {
    fn from(raw: wire::RawDeadlines) -> Self {
        Deadlines {
            funding: raw.funding,
            creative: raw.creative,
            posting: raw.posting,
        }
    }
}

impl From<wire::RawPostingPlan> for PostingPlan {
    fn from(raw: wire::RawPostingPlan) -> Self {
        PostingPlan {
            proposals: raw.proposals.into_iter().map(PostingPlanProposal::from).collect(),
        }
    }
}

impl From<wire::RawPostingPlanProposal> for PostingPlanProposal {
    fn from(raw: wire::RawPostingPlanProposal) -> Self {
        let status = match raw.status.as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some("accepted") => ProposalStatus::Accepted,
            Some("rejected") => ProposalStatus::Rejected,
            Some("countered") => ProposalStatus::Countered,
            _ => ProposalStatus::Pending,
        };
        PostingPlanProposal {
            post_at: raw.post_at,
            guarantee_hours: raw.guarantee_hours.unwrap_or(24),
            proposed_by: raw.proposed_by,
            status,
        }
    }
}

impl From<wire::RawCreative> for CreativeSubmission {
    fn from(raw: wire::RawCreative) -> Self {
        let status = match raw.status.as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some("approved") => CreativeStatus::Approved,
            Some("revision_requested") => CreativeStatus::RevisionRequested,
            _ => CreativeStatus::Pending,
        };
        CreativeSubmission {
            id: raw.id,
            submitted_at: raw.submitted_at,
            text: raw.text.unwrap_or_default(),
            media: raw
                .media
                .into_iter()
                .map(|m| MediaAttachment {
                    kind: m.kind.unwrap_or_else(|| "photo".to_string()),
                    url: m.url,
                })
                .collect(),
            inline_buttons: raw
                .inline_buttons
                .into_iter()
                .map(|b| InlineButton { text: b.text, url: b.url })
                .collect(),
            feedback: raw.feedback,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::deal::MilestoneState;
    use serde_json::json;

    fn deal_from(value: serde_json::Value) -> Deal {
        let raw: wire::RawDeal = serde_json::from_value(value).unwrap();
        raw.into()
    }

    #[test]
    fn test_minimal_deal_gets_safe_defaults() {
        let deal = deal_from(json!({"id": "deal_1"}));
        assert_eq!(deal.backend_status, BackendDealStatus::Created);
        assert_eq!(deal.status, DealStatus::Created);
        assert_eq!(deal.escrow_status, EscrowStatus::None);
        assert_eq!(deal.currency, "TON");
        assert_eq!(deal.finance.agreed_price, Decimal::ZERO);
        assert!(!deal.actions.any());
        assert_eq!(deal.milestones.len(), 7);
        assert_eq!(deal.milestones[0].state, MilestoneState::Active);
    }

    #[test]
    fn test_workflow_status_takes_precedence() {
        let deal = deal_from(json!({
            "id": "deal_1",
            "status": "NEGOTIATING",
            "workflowStatus": "FUNDED",
        }));
        assert_eq!(deal.backend_status, BackendDealStatus::Funded);
    }

    #[test]
    fn test_unknown_workflow_status_falls_back_to_status() {
        let deal = deal_from(json!({
            "id": "deal_1",
            "status": "NEGOTIATING",
            "workflowStatus": "SOMETHING_NEW",
        }));
        assert_eq!(deal.backend_status, BackendDealStatus::Negotiating);
    }

    #[test]
    fn test_ton_amounts_normalized() {
        let deal = deal_from(json!({
            "id": "deal_1",
            "currency": "TON",
            "agreedPrice": 1_000_000_000i64,
            "platformFeeAmount": 50_000_000i64,
            "publisherAmount": 950_000_000i64,
        }));
        assert_eq!(deal.finance.agreed_price, Decimal::ONE);
        assert_eq!(deal.finance.platform_fee_amount, Decimal::new(5, 2));
        assert_eq!(deal.finance.publisher_amount, Decimal::new(95, 2));
    }

    #[test]
    fn test_non_ton_amounts_untouched() {
        let deal = deal_from(json!({
            "id": "deal_1",
            "currency": "XTR",
            "agreedPrice": 1_000_000_000i64,
            "platformFeeAmount": 50_000_000i64,
            "publisherAmount": 950_000_000i64,
        }));
        assert_eq!(deal.finance.agreed_price, Decimal::from(1_000_000_000i64));
    }

    #[test]
    fn test_agreed_price_string_parses() {
        let deal = deal_from(json!({
            "id": "deal_1",
            "agreedPrice": "12.5",
            "platformFeeAmount": "0.625",
            "publisherAmount": "11.875",
        }));
        assert_eq!(deal.finance.agreed_price, Decimal::new(125, 1));
    }

    #[test]
    fn test_creative_status_lenient() {
        let deal = deal_from(json!({
            "id": "deal_1",
            "creative": {
                "id": "cr_1",
                "text": "Buy now",
                "status": "REVISION_REQUESTED",
                "feedback": "tone it down",
            },
        }));
        let creative = deal.creative.unwrap();
        assert_eq!(creative.status, CreativeStatus::RevisionRequested);
        assert_eq!(creative.feedback.as_deref(), Some("tone it down"));
    }

    #[test]
    fn test_posting_plan_proposals_mapped() {
        let deal = deal_from(json!({
            "id": "deal_1",
            "postingPlan": {
                "proposals": [
                    {"postAt": "2024-05-01T10:00:00Z", "guaranteeHours": 48, "proposedBy": "publisher", "status": "rejected"},
                    {"postAt": "2024-05-02T10:00:00Z", "proposedBy": "advertiser"},
                ],
            },
        }));
        let plan = deal.posting_plan.unwrap();
        assert_eq!(plan.proposals.len(), 2);
        assert_eq!(plan.proposals[0].status, ProposalStatus::Rejected);
        // missing status and guarantee default to pending / 24h
        assert_eq!(plan.proposals[1].status, ProposalStatus::Pending);
        assert_eq!(plan.proposals[1].guarantee_hours, 24);
        assert_eq!(plan.pending().unwrap().guarantee_hours, 24);
    }

    #[test]
    fn test_terminal_deal_chat_defaults_closed() {
        let deal = deal_from(json!({"id": "deal_1", "status": "CANCELLED"}));
        assert_eq!(deal.chat.status, crate::domain::deal::DealChatStatus::Closed);
        assert!(deal.is_terminal());
    }
}
