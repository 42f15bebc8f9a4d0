//! Briefs sub-client.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::Brief;
use crate::client::AdMarketClient;
use crate::error::SdkError;
use crate::shared::BriefId;

/// Sub-client for brief operations.
pub struct Briefs<'a> {
    pub(crate) client: &'a AdMarketClient,
}

/// Payload for creating a brief.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBriefRequest {
    pub title: String,
    pub description: String,
    pub budget: Decimal,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl<'a> Briefs<'a> {
    pub async fn list(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Vec<Brief>, SdkError> {
        let resp = self.client.http.get_briefs(page, limit).await?;
        Ok(resp.briefs.into_iter().map(Brief::from).collect())
    }

    pub async fn get(&self, brief_id: &BriefId) -> Result<Brief, SdkError> {
        let raw = self.client.http.get_brief(brief_id.as_str()).await?;
        Ok(raw.into())
    }

    pub async fn create(&self, request: &CreateBriefRequest) -> Result<Brief, SdkError> {
        let raw = self.client.http.create_brief(request).await?;
        Ok(raw.into())
    }

    pub async fn close(&self, brief_id: &BriefId) -> Result<Brief, SdkError> {
        let raw = self.client.http.close_brief(brief_id.as_str()).await?;
        Ok(raw.into())
    }
}
