//! Server-declared action permissions for the current viewer.
//!
//! The client is not the authorization authority: these flags gate UI
//! controls and nothing else. No cross-field validation happens here — the
//! server's word is taken verbatim, and anything missing or malformed
//! defaults to `false` so no destructive control is offered when uncertain.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::coerce;

/// The ten per-viewer permission flags attached to a deal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableActions {
    pub accept_terms: bool,
    pub fund_deal: bool,
    pub verify_payment: bool,
    pub submit_creative: bool,
    pub approve_creative: bool,
    pub request_creative_revision: bool,
    pub cancel_deal: bool,
    pub propose_posting_plan: bool,
    pub respond_posting_plan: bool,
    pub open_dispute: bool,
}

impl AvailableActions {
    /// Map the raw `availableActions` payload. Each field is coerced with
    /// JS-style truthiness; a missing or non-object payload yields all-false.
    pub fn from_raw(raw: Option<&Value>) -> Self {
        let Some(obj) = raw.and_then(|v| v.as_object()) else {
            return Self::default();
        };
        let flag = |name: &str| obj.get(name).map(coerce::truthy).unwrap_or(false);
        Self {
            accept_terms: flag("acceptTerms"),
            fund_deal: flag("fundDeal"),
            verify_payment: flag("verifyPayment"),
            submit_creative: flag("submitCreative"),
            approve_creative: flag("approveCreative"),
            request_creative_revision: flag("requestCreativeRevision"),
            cancel_deal: flag("cancelDeal"),
            propose_posting_plan: flag("proposePostingPlan"),
            respond_posting_plan: flag("respondPostingPlan"),
            open_dispute: flag("openDispute"),
        }
    }

    /// True when any flag is set — used to decide whether the actions bar renders.
    pub fn any(&self) -> bool {
        self.accept_terms
            || self.fund_deal
            || self.verify_payment
            || self.submit_creative
            || self.approve_creative
            || self.request_creative_revision
            || self.cancel_deal
            || self.propose_posting_plan
            || self.respond_posting_plan
            || self.open_dispute
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_payload_defaults_all_false() {
        let actions = AvailableActions::from_raw(None);
        assert_eq!(actions, AvailableActions::default());
        assert!(!actions.any());
    }

    #[test]
    fn test_non_object_payload_defaults_all_false() {
        assert!(!AvailableActions::from_raw(Some(&json!("yes"))).any());
        assert!(!AvailableActions::from_raw(Some(&json!([true]))).any());
    }

    #[test]
    fn test_truthy_coercion() {
        let actions = AvailableActions::from_raw(Some(&json!({"fundDeal": "yes"})));
        assert!(actions.fund_deal);
        assert!(!actions.accept_terms);
        assert!(!actions.cancel_deal);
    }

    #[test]
    fn test_falsy_values_stay_false() {
        let actions = AvailableActions::from_raw(Some(&json!({
            "fundDeal": false,
            "acceptTerms": 0,
            "cancelDeal": "",
            "openDispute": null,
        })));
        assert!(!actions.any());
    }

    #[test]
    fn test_full_payload() {
        let actions = AvailableActions::from_raw(Some(&json!({
            "acceptTerms": true,
            "submitCreative": true,
            "respondPostingPlan": 1,
        })));
        assert!(actions.accept_terms);
        assert!(actions.submit_creative);
        assert!(actions.respond_posting_plan);
        assert!(!actions.fund_deal);
        assert!(actions.any());
    }
}
