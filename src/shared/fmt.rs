//! Display formatting helpers for amounts and timestamps.
//!
//! Used by consumers rendering deal cards and milestone timelines; kept here
//! so the formatting rules stay consistent across surfaces.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Format a money amount with its currency code, trimming trailing zeros.
///
/// TON amounts keep up to 4 decimal places, Stars (and anything else) render
/// as whole numbers.
pub fn format_amount(amount: Decimal, currency: &str) -> String {
    let rendered = if currency.eq_ignore_ascii_case("TON") {
        let rounded = amount.round_dp(4).normalize();
        rounded.to_string()
    } else {
        amount.round_dp(0).to_string()
    };
    format!("{} {}", rendered, currency)
}

/// Abbreviate a large count (subscriber/view figures) with K/M suffixes.
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        let m = Decimal::from(n) / Decimal::from(1_000_000);
        format!("{}M", m.round_dp(1).normalize())
    } else if n >= 1_000 {
        let k = Decimal::from(n) / Decimal::from(1_000);
        format!("{}K", k.round_dp(1).normalize())
    } else {
        n.to_string()
    }
}

/// Render a milestone timestamp in the compact form the timeline shows.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_amount_ton_trims_zeros() {
        assert_eq!(format_amount(Decimal::new(105, 2), "TON"), "1.05 TON");
        assert_eq!(format_amount(Decimal::from(2), "TON"), "2 TON");
        assert_eq!(format_amount(Decimal::new(123456, 5), "TON"), "1.2346 TON");
    }

    #[test]
    fn test_format_amount_stars_whole() {
        assert_eq!(format_amount(Decimal::new(2505, 1), "XTR"), "251 XTR");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(950), "950");
        assert_eq!(format_count(12_400), "12.4K");
        assert_eq!(format_count(3_000_000), "3M");
    }

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        assert_eq!(format_timestamp(ts), "Mar 5, 2024 14:30");
    }
}
