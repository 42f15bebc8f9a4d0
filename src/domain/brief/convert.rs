//! Conversion: BriefResponse → Brief. Total, with the same degrade-don't-fail
//! posture as the deal mappers.

use rust_decimal::Decimal;

use super::wire;
use super::{Brief, BriefStatus, BriefTargeting};
use crate::shared::coerce;

impl From<wire::BriefResponse> for Brief {
    fn from(raw: wire::BriefResponse) -> Self {
        let status = coerce::as_uppercase_str(&raw.status)
            .as_deref()
            .and_then(BriefStatus::from_str)
            .unwrap_or(BriefStatus::Draft);

        Brief {
            id: raw.id,
            title: raw.title.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            status,
            budget: coerce::as_decimal(&raw.budget).unwrap_or(Decimal::ZERO),
            currency: raw.currency.unwrap_or_else(|| "TON".to_string()),
            ad_format: raw.ad_format,
            targeting: raw
                .targeting
                .map(|t| BriefTargeting {
                    categories: t.categories,
                    languages: t.languages,
                    min_subscribers: t.min_subscribers,
                })
                .unwrap_or_default(),
            created_at: raw.created_at,
            expires_at: raw.expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_brief_gets_defaults() {
        let raw: wire::BriefResponse = serde_json::from_value(json!({"id": "brief_1"})).unwrap();
        let brief = Brief::from(raw);
        assert_eq!(brief.status, BriefStatus::Draft);
        assert_eq!(brief.budget, Decimal::ZERO);
        assert_eq!(brief.currency, "TON");
        assert!(brief.targeting.categories.is_empty());
    }

    #[test]
    fn test_full_brief_maps() {
        let raw: wire::BriefResponse = serde_json::from_value(json!({
            "id": "brief_1",
            "title": "Spring promo",
            "status": "open",
            "budget": "500",
            "currency": "TON",
            "targeting": {"categories": ["crypto"], "minSubscribers": 10000},
        }))
        .unwrap();
        let brief = Brief::from(raw);
        assert_eq!(brief.status, BriefStatus::Open);
        assert_eq!(brief.budget, Decimal::from(500));
        assert_eq!(brief.targeting.min_subscribers, Some(10_000));
    }
}
