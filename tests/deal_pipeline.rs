//! End-to-end mapping test: a realistic deal payload, as the backend sends
//! it, through serde into the UI-ready `Deal`.

use admarket_sdk::prelude::*;
use rust_decimal::Decimal;

fn fixture() -> &'static str {
    r#"{
        "id": "deal_8f3c2a",
        "channelId": "ch_42",
        "briefId": "brief_7",
        "agreedPrice": 2000000000,
        "platformFeeAmount": 100000000,
        "publisherAmount": 1900000000,
        "currency": "TON",
        "status": "AWAITING_CREATIVE",
        "workflowStatus": "creative_submitted",
        "escrowStatus": "held",
        "statusHistory": [
            {"status": "CREATED", "timestamp": "2024-03-01T09:00:00Z", "actor": "advertiser"},
            {"status": "TERMS_AGREED", "timestamp": "2024-03-01T12:00:00Z"},
            {"status": "AWAITING_PAYMENT", "timestamp": "2024-03-01T12:01:00Z"},
            {"status": "FUNDED", "timestamp": "2024-03-02T08:30:00Z"},
            {"status": "AWAITING_CREATIVE", "timestamp": "2024-03-02T08:31:00Z"},
            {"status": "BOGUS_STATUS", "timestamp": "2024-03-02T09:00:00Z"},
            {"status": "CREATIVE_SUBMITTED", "timestamp": "not-a-date"}
        ],
        "availableActions": {
            "approveCreative": true,
            "requestCreativeRevision": true,
            "cancelDeal": "yes",
            "fundDeal": false
        },
        "dealChat": {"status": "ACTIVE", "openedByMe": true},
        "openDealChatUrl": "https://t.me/c/123/1",
        "deadlines": {"creative": "2024-03-05T00:00:00Z"},
        "postingPlan": {
            "proposals": [
                {"postAt": "2024-03-10T10:00:00Z", "guaranteeHours": 48,
                 "proposedBy": "publisher", "status": "pending"}
            ]
        },
        "creative": {
            "id": "cr_1",
            "submittedAt": "2024-03-02T09:15:00Z",
            "text": "Launch week: 20% off",
            "media": [{"type": "photo", "url": "https://cdn.admarket.app/cr_1.jpg"}],
            "inlineButtons": [{"text": "Shop", "url": "https://example.com"}],
            "status": "pending"
        },
        "channel": {"id": "ch_42", "title": "Crypto Daily", "username": "cryptodaily", "subscribers": 52000},
        "advertiser": {"id": "adv_9", "name": "Acme Labs"},
        "adFormat": {"id": "fmt_1", "name": "Post", "placement": "1/24"}
    }"#
}

fn map_fixture() -> Deal {
    let raw: admarket_sdk::domain::deal::wire::RawDeal =
        serde_json::from_str(fixture()).expect("fixture deserializes");
    raw.into()
}

#[test]
fn workflow_status_wins_and_mirrors_to_ui_status() {
    let deal = map_fixture();
    assert_eq!(deal.backend_status, BackendDealStatus::CreativeSubmitted);
    assert_eq!(deal.status, DealStatus::CreativeSubmitted);
    assert_eq!(deal.status.label(), "Creative submitted");
}

#[test]
fn ton_amounts_come_out_in_whole_units() {
    let deal = map_fixture();
    assert_eq!(deal.finance.agreed_price, Decimal::from(2));
    assert_eq!(deal.finance.platform_fee_amount, Decimal::new(1, 1));
    assert_eq!(deal.finance.publisher_amount, Decimal::new(19, 1));
}

#[test]
fn milestones_reflect_mid_creative_progress() {
    let deal = map_fixture();
    let states: Vec<MilestoneState> = deal.milestones.iter().map(|m| m.state).collect();
    assert_eq!(
        states,
        [
            MilestoneState::Done,     // created
            MilestoneState::Done,     // terms
            MilestoneState::Done,     // payment
            MilestoneState::Active,   // creative
            MilestoneState::Upcoming, // posting-plan
            MilestoneState::Upcoming, // publication
            MilestoneState::Upcoming, // completion
        ]
    );
    // payment stage timestamp comes from the earliest matching entry
    let payment = &deal.milestones[2];
    assert_eq!(
        payment.timestamp.unwrap().to_rfc3339(),
        "2024-03-01T12:01:00+00:00"
    );
}

#[test]
fn malformed_history_entries_are_dropped() {
    let deal = map_fixture();
    // 7 raw entries, 2 malformed (unknown status, unparseable timestamp)
    assert_eq!(deal.history.len(), 5);
    assert!(deal
        .history
        .windows(2)
        .all(|w| w[0].timestamp <= w[1].timestamp));
}

#[test]
fn action_flags_coerce_truthily() {
    let deal = map_fixture();
    assert!(deal.actions.approve_creative);
    assert!(deal.actions.request_creative_revision);
    assert!(deal.actions.cancel_deal); // "yes" is truthy
    assert!(!deal.actions.fund_deal);
    assert!(!deal.actions.accept_terms);
}

#[test]
fn escrow_chat_and_collaborators_map() {
    let deal = map_fixture();
    assert_eq!(deal.escrow_status, EscrowStatus::Held);
    assert_eq!(deal.escrow_status.label(), "Funds held");
    assert_eq!(deal.chat.status, DealChatStatus::Active);
    assert!(deal.chat.opened_by_me);
    assert!(deal.chat.is_openable);
    assert_eq!(deal.open_chat_url.as_deref(), Some("https://t.me/c/123/1"));
    assert_eq!(deal.channel.as_ref().unwrap().title, "Crypto Daily");
    assert_eq!(deal.advertiser.as_ref().unwrap().name, "Acme Labs");
    assert_eq!(deal.ad_format.as_ref().unwrap().placement.as_deref(), Some("1/24"));
}

#[test]
fn posting_plan_and_creative_map() {
    let deal = map_fixture();
    let plan = deal.posting_plan.as_ref().unwrap();
    let pending = plan.pending().unwrap();
    assert_eq!(pending.guarantee_hours, 48);
    assert_eq!(pending.proposed_by, Some(Role::Publisher));

    let creative = deal.creative.as_ref().unwrap();
    assert_eq!(creative.status, CreativeStatus::Pending);
    assert_eq!(creative.media.len(), 1);
    assert_eq!(creative.inline_buttons[0].text, "Shop");
}

#[test]
fn cancelled_deal_freezes_timeline_where_it_stopped() {
    let json = r#"{
        "id": "deal_x",
        "status": "CANCELLED",
        "statusHistory": [
            {"status": "CREATED", "timestamp": "2024-01-01T00:00:00Z"},
            {"status": "FUNDED", "timestamp": "2024-01-02T00:00:00Z"},
            {"status": "CANCELLED", "timestamp": "2024-01-03T00:00:00Z"}
        ]
    }"#;
    let raw: admarket_sdk::domain::deal::wire::RawDeal = serde_json::from_str(json).unwrap();
    let deal: Deal = raw.into();
    assert!(deal.is_terminal());
    let states: Vec<MilestoneState> = deal.milestones.iter().map(|m| m.state).collect();
    assert!(!states.contains(&MilestoneState::Active));
    assert_eq!(states[2], MilestoneState::Done); // payment, where it stopped
    assert_eq!(states[3], MilestoneState::Upcoming); // creative onward
    assert_eq!(deal.chat.status, DealChatStatus::Closed);
}

#[test]
fn garbage_everywhere_still_yields_a_renderable_deal() {
    let json = r#"{
        "id": "deal_y",
        "status": 17,
        "workflowStatus": {"nested": true},
        "escrowStatus": [],
        "statusHistory": "no",
        "availableActions": "all of them",
        "dealChat": 0,
        "agreedPrice": "not-money"
    }"#;
    let raw: admarket_sdk::domain::deal::wire::RawDeal = serde_json::from_str(json).unwrap();
    let deal: Deal = raw.into();
    assert_eq!(deal.backend_status, BackendDealStatus::Created);
    assert_eq!(deal.finance.agreed_price, Decimal::ZERO);
    assert!(!deal.actions.any());
    assert!(deal.history.is_empty());
    assert_eq!(deal.milestones.len(), 7);
}
