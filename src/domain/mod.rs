//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (UI-ready, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — Conversions and defensive mappers
//! - `client.rs` — Sub-client with HTTP methods

pub mod brief;
pub mod channel;
pub mod deal;
