//! Deals sub-client — fetch and drive the deal workflow.
//!
//! Every workflow mutation POSTs one action and returns the updated [`Deal`],
//! rebuilt from the response. Which actions the viewer may take is declared
//! by the server via [`super::AvailableActions`]; this client does not gate
//! calls on those flags — the server is the authority and will reject
//! anything out of turn.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Deal, DealFilter};
use crate::client::AdMarketClient;
use crate::error::SdkError;
use crate::shared::{DealId, Role};

/// Sub-client for deal operations.
pub struct Deals<'a> {
    pub(crate) client: &'a AdMarketClient,
}

// ─── Request bodies ──────────────────────────────────────────────────────────

/// A creative submission from the publisher.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitCreativeRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<MediaInput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inline_buttons: Vec<InlineButtonInput>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MediaInput {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InlineButtonInput {
    pub text: String,
    pub url: String,
}

/// A posting date + guarantee term proposal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingPlanInput {
    pub post_at: DateTime<Utc>,
    pub guarantee_hours: u32,
}

/// Reply to the counterparty's pending posting-plan proposal.
///
/// A counter-offer carries its payload in the variant, so "countered without
/// a counter proposal" cannot be expressed.
#[derive(Debug, Clone)]
pub enum PostingPlanReply {
    Accept,
    Reject,
    Counter(PostingPlanInput),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PostingPlanReplyBody<'a> {
    response: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    counter: Option<&'a PostingPlanInput>,
}

#[derive(Serialize)]
struct ReasonBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
}

fn empty_body() -> serde_json::Value {
    serde_json::json!({})
}

// ─── Sub-client ──────────────────────────────────────────────────────────────

impl<'a> Deals<'a> {
    /// List the viewer's deals, optionally constrained to a filter tab and a
    /// role. Deals are always mapped fresh — no caching.
    pub async fn list(
        &self,
        filter: DealFilter,
        role: Option<Role>,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Vec<Deal>, SdkError> {
        let resp = self.client.http.get_deals(filter, role, page, limit).await?;
        Ok(resp.deals.into_iter().map(Deal::from).collect())
    }

    /// Fetch one deal.
    pub async fn get(&self, deal_id: &DealId) -> Result<Deal, SdkError> {
        let raw = self.client.http.get_deal(deal_id.as_str()).await?;
        Ok(raw.into())
    }

    // ── Workflow actions ─────────────────────────────────────────────────

    pub async fn accept_terms(&self, deal_id: &DealId) -> Result<Deal, SdkError> {
        self.action(deal_id, "accept-terms", &empty_body()).await
    }

    pub async fn fund(&self, deal_id: &DealId) -> Result<Deal, SdkError> {
        self.action(deal_id, "fund", &empty_body()).await
    }

    pub async fn verify_payment(&self, deal_id: &DealId) -> Result<Deal, SdkError> {
        self.action(deal_id, "verify-payment", &empty_body()).await
    }

    pub async fn submit_creative(
        &self,
        deal_id: &DealId,
        creative: &SubmitCreativeRequest,
    ) -> Result<Deal, SdkError> {
        self.action(deal_id, "creative", creative).await
    }

    pub async fn approve_creative(&self, deal_id: &DealId) -> Result<Deal, SdkError> {
        self.action(deal_id, "creative/approve", &empty_body()).await
    }

    pub async fn request_creative_revision(
        &self,
        deal_id: &DealId,
        feedback: Option<&str>,
    ) -> Result<Deal, SdkError> {
        self.action(deal_id, "creative/request-revision", &ReasonBody { reason: feedback })
            .await
    }

    pub async fn cancel(&self, deal_id: &DealId, reason: Option<&str>) -> Result<Deal, SdkError> {
        self.action(deal_id, "cancel", &ReasonBody { reason }).await
    }

    pub async fn open_dispute(
        &self,
        deal_id: &DealId,
        reason: &str,
    ) -> Result<Deal, SdkError> {
        self.action(deal_id, "dispute", &ReasonBody { reason: Some(reason) })
            .await
    }

    pub async fn propose_posting_plan(
        &self,
        deal_id: &DealId,
        proposal: &PostingPlanInput,
    ) -> Result<Deal, SdkError> {
        self.action(deal_id, "posting-plan", proposal).await
    }

    pub async fn respond_posting_plan(
        &self,
        deal_id: &DealId,
        reply: &PostingPlanReply,
    ) -> Result<Deal, SdkError> {
        let body = match reply {
            PostingPlanReply::Accept => PostingPlanReplyBody {
                response: "accepted",
                counter: None,
            },
            PostingPlanReply::Reject => PostingPlanReplyBody {
                response: "rejected",
                counter: None,
            },
            PostingPlanReply::Counter(input) => PostingPlanReplyBody {
                response: "countered",
                counter: Some(input),
            },
        };
        self.action(deal_id, "posting-plan/respond", &body).await
    }

    pub async fn open_chat(&self, deal_id: &DealId) -> Result<Deal, SdkError> {
        self.action(deal_id, "chat/open", &empty_body()).await
    }

    async fn action<B: Serialize>(
        &self,
        deal_id: &DealId,
        action: &str,
        body: &B,
    ) -> Result<Deal, SdkError> {
        let raw = self
            .client
            .http
            .post_deal_action(deal_id.as_str(), action, body)
            .await?;
        Ok(raw.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_body_serialization() {
        let accept = PostingPlanReplyBody {
            response: "accepted",
            counter: None,
        };
        assert_eq!(
            serde_json::to_string(&accept).unwrap(),
            r#"{"response":"accepted"}"#
        );

        let input = PostingPlanInput {
            post_at: "2024-05-01T10:00:00Z".parse().unwrap(),
            guarantee_hours: 24,
        };
        let counter = PostingPlanReplyBody {
            response: "countered",
            counter: Some(&input),
        };
        let json = serde_json::to_string(&counter).unwrap();
        assert!(json.contains("\"response\":\"countered\""));
        assert!(json.contains("\"guaranteeHours\":24"));
    }

    #[test]
    fn test_creative_request_skips_empty_collections() {
        let req = SubmitCreativeRequest {
            text: "Buy now".to_string(),
            media: vec![],
            inline_buttons: vec![],
        };
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"text":"Buy now"}"#);
    }
}
