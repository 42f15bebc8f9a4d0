//! Deal chat state — the negotiation chat attached to a deal.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::status::BackendDealStatus;
use crate::shared::coerce;

/// Lifecycle of the deal chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DealChatStatus {
    PendingOpen,
    Active,
    Closed,
}

impl DealChatStatus {
    fn from_str(s: &str) -> Option<Self> {
        match s {
            "PENDING_OPEN" => Some(Self::PendingOpen),
            "ACTIVE" => Some(Self::Active),
            "CLOSED" => Some(Self::Closed),
            _ => None,
        }
    }
}

/// Chat state as rendered on the deal screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealChat {
    pub status: DealChatStatus,
    pub opened_by_me: bool,
    pub opened_by_counterparty: bool,
    pub is_openable: bool,
}

impl DealChat {
    /// Map the raw `dealChat` payload.
    ///
    /// An unknown or missing chat status falls back to `Closed` when the deal
    /// itself is terminal, `PendingOpen` otherwise. `isOpenable` defaults to
    /// "not closed" when the server does not say.
    pub fn from_raw(raw: Option<&Value>, deal_status: BackendDealStatus) -> Self {
        let obj = raw.and_then(|v| v.as_object());

        let status = obj
            .and_then(|o| o.get("status"))
            .and_then(coerce::as_uppercase_str)
            .and_then(|s| DealChatStatus::from_str(&s))
            .unwrap_or(if deal_status.is_terminal() {
                DealChatStatus::Closed
            } else {
                DealChatStatus::PendingOpen
            });

        let flag = |name: &str| {
            obj.and_then(|o| o.get(name))
                .map(coerce::truthy)
                .unwrap_or(false)
        };

        let is_openable = obj
            .and_then(|o| o.get("isOpenable"))
            .map(coerce::truthy)
            .unwrap_or(status != DealChatStatus::Closed);

        Self {
            status,
            opened_by_me: flag("openedByMe"),
            opened_by_counterparty: flag("openedByCounterparty"),
            is_openable,
        }
    }
}
