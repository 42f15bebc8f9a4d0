//! # AdMarket SDK
//!
//! A Rust client for the AdMarket marketplace backend — the Telegram Mini App
//! connecting advertisers (who post briefs seeking channel placements) with
//! channel owners (who list ad inventory and fulfill deals).
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes and domain models (always available). The
//!    deal mappers — status normalization, milestone timeline, action flags,
//!    TON amount reconciliation, chat state — are pure functions over raw
//!    wire payloads and never fail on malformed data.
//! 2. **HTTP API** — `AdMarketHttp` with per-endpoint retry policies.
//! 3. **High-Level Client** — `AdMarketClient` with nested sub-clients and
//!    a channel TTL cache.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use admarket_sdk::prelude::*;
//!
//! let client = AdMarketClient::builder()
//!     .init_data(web_app_init_data)
//!     .build()?;
//!
//! let deals = client.deals().list(DealFilter::Payment, None, None, None).await?;
//! for deal in &deals {
//!     println!("{}: {}", deal.id, deal.status.label());
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `AdMarketClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{BriefId, ChannelId, DealId, Role};

    // Domain types — deal
    pub use crate::domain::deal::{
        build_milestones, AvailableActions, BackendDealStatus, CreativeStatus,
        CreativeSubmission, Deadlines, Deal, DealChat, DealChatStatus, DealFilter, DealStatus,
        EscrowStatus, FinanceAmounts, Milestone, MilestoneState, NanoHeuristics, PostingPlan,
        PostingPlanProposal, ProposalStatus, StatusHistoryEntry,
    };

    // Domain types — brief, channel
    pub use crate::domain::brief::{Brief, BriefStatus, BriefTargeting};
    pub use crate::domain::channel::{AdFormatListing, Channel, ChannelStats};

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AdMarketClient, AdMarketClientBuilder, BriefsClient, ChannelsClient, DealsClient,
    };
    #[cfg(feature = "http")]
    pub use crate::domain::brief::client::CreateBriefRequest;
    #[cfg(feature = "http")]
    pub use crate::domain::deal::client::{
        InlineButtonInput, MediaInput, PostingPlanInput, PostingPlanReply, SubmitCreativeRequest,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
