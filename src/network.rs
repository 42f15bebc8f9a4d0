//! Network URL constants.

/// Production REST API.
pub const DEFAULT_API_URL: &str = "https://api.admarket.app";

/// Staging REST API.
pub const STAGING_API_URL: &str = "https://staging-api.admarket.app";
