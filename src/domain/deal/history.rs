//! Status history — defensive parsing of the backend's transition log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::status::BackendDealStatus;
use crate::shared::coerce;

/// One recorded workflow transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    pub status: BackendDealStatus,
    pub timestamp: DateTime<Utc>,
    pub actor: Option<String>,
}

/// Parse the raw `statusHistory` array into a well-formed, time-ordered log.
///
/// Entries with unrecognized status strings or unparseable timestamps are
/// dropped, not defaulted; the result may be empty. Never fails.
pub fn parse_status_history(raw: &Value) -> Vec<StatusHistoryEntry> {
    let Some(items) = raw.as_array() else {
        return Vec::new();
    };

    let mut entries: Vec<StatusHistoryEntry> = Vec::with_capacity(items.len());
    for item in items {
        let Some(obj) = item.as_object() else {
            tracing::debug!(?item, "dropping non-object history entry");
            continue;
        };
        let status = obj
            .get("status")
            .and_then(coerce::as_uppercase_str)
            .and_then(|s| BackendDealStatus::from_str(&s));
        let timestamp = obj.get("timestamp").and_then(coerce::as_timestamp);
        let (Some(status), Some(timestamp)) = (status, timestamp) else {
            tracing::debug!(?item, "dropping malformed history entry");
            continue;
        };
        let actor = obj.get("actor").and_then(|v| v.as_str()).map(str::to_owned);
        entries.push(StatusHistoryEntry {
            status,
            timestamp,
            actor,
        });
    }

    entries.sort_by_key(|e| e.timestamp);
    entries
}

/// Earliest entry whose status is in `statuses`, if any.
pub fn earliest_matching<'a>(
    history: &'a [StatusHistoryEntry],
    statuses: &[BackendDealStatus],
) -> Option<&'a StatusHistoryEntry> {
    history.iter().find(|e| statuses.contains(&e.status))
}

/// Most recent entry whose status is not terminal, if any. Used to freeze the
/// milestone timeline of cancelled/expired/refunded/resolved deals at the
/// stage they actually reached.
pub fn last_non_terminal(history: &[StatusHistoryEntry]) -> Option<&StatusHistoryEntry> {
    history.iter().rev().find(|e| !e.status.is_terminal())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_drops_garbage() {
        let raw = json!([
            {"status": "CREATED", "timestamp": "not-a-date"},
            {"status": "NOPE", "timestamp": "2024-01-01T00:00:00Z"},
        ]);
        assert!(parse_status_history(&raw).is_empty());
    }

    #[test]
    fn test_non_array_is_empty() {
        assert!(parse_status_history(&json!(null)).is_empty());
        assert!(parse_status_history(&json!({"status": "CREATED"})).is_empty());
        assert!(parse_status_history(&json!("history")).is_empty());
    }

    #[test]
    fn test_sorts_ascending() {
        let raw = json!([
            {"status": "FUNDED", "timestamp": "2024-02-01T00:00:00Z"},
            {"status": "CREATED", "timestamp": "2024-01-01T00:00:00Z", "actor": "advertiser"},
        ]);
        let parsed = parse_status_history(&raw);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].status, BackendDealStatus::Created);
        assert_eq!(parsed[0].actor.as_deref(), Some("advertiser"));
        assert_eq!(parsed[1].status, BackendDealStatus::Funded);
    }

    #[test]
    fn test_case_insensitive_status() {
        let raw = json!([{"status": "funded", "timestamp": "2024-02-01T00:00:00Z"}]);
        let parsed = parse_status_history(&raw);
        assert_eq!(parsed[0].status, BackendDealStatus::Funded);
    }

    #[test]
    fn test_last_non_terminal_skips_terminal_tail() {
        let raw = json!([
            {"status": "CREATED", "timestamp": "2024-01-01T00:00:00Z"},
            {"status": "FUNDED", "timestamp": "2024-01-02T00:00:00Z"},
            {"status": "CANCELLED", "timestamp": "2024-01-03T00:00:00Z"},
        ]);
        let parsed = parse_status_history(&raw);
        let last = last_non_terminal(&parsed).unwrap();
        assert_eq!(last.status, BackendDealStatus::Funded);
    }

    #[test]
    fn test_earliest_matching() {
        let raw = json!([
            {"status": "AWAITING_PAYMENT", "timestamp": "2024-01-01T00:00:00Z"},
            {"status": "FUNDED", "timestamp": "2024-01-02T00:00:00Z"},
        ]);
        let parsed = parse_status_history(&raw);
        let hit = earliest_matching(
            &parsed,
            &[BackendDealStatus::AwaitingPayment, BackendDealStatus::Funded],
        )
        .unwrap();
        assert_eq!(hit.status, BackendDealStatus::AwaitingPayment);
    }
}
