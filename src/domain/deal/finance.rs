//! TON amount reconciliation.
//!
//! The backend reports TON amounts inconsistently: any of the three financial
//! fields of a deal may arrive in whole units or in nano units (1e9 scale),
//! per response. This module detects and reconciles the scale so the rest of
//! the SDK only ever sees whole-unit amounts.
//!
//! This is a compatibility shim against upstream serialization, not a
//! guaranteed-correct conversion; it is heuristic and isolated behind
//! [`normalize_ton_amounts`] so call sites survive its removal once the
//! server normalizes units itself.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The three financial figures attached to a deal, in whole currency units
/// after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceAmounts {
    pub agreed_price: Decimal,
    pub platform_fee_amount: Decimal,
    pub publisher_amount: Decimal,
}

/// Tuning constants for nano-unit detection.
///
/// These thresholds have no documented derivation upstream; they are kept
/// configurable rather than treated as load-bearing literals.
#[derive(Debug, Clone, Copy)]
pub struct NanoHeuristics {
    /// An all-integer triplet whose price is at least this large is treated
    /// as nano-denominated even when internally consistent.
    pub integer_floor: Decimal,
    /// Fallback per-field conversion requires the value to be at least
    /// `agreed_price * price_multiplier`.
    pub price_multiplier: Decimal,
    /// Relative tolerance for the consistency comparisons.
    pub rel_tolerance: Decimal,
}

impl Default for NanoHeuristics {
    fn default() -> Self {
        Self {
            integer_floor: Decimal::from(1_000_000),
            price_multiplier: Decimal::from(1_000),
            rel_tolerance: Decimal::new(1, 6), // 1e-6
        }
    }
}

const NANO: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

fn approx_eq(a: Decimal, b: Decimal, tol: Decimal) -> bool {
    let diff = (a - b).abs();
    let scale = a.abs().max(b.abs());
    if scale.is_zero() {
        return diff.is_zero();
    }
    diff <= scale * tol
}

fn is_integer(d: Decimal) -> bool {
    d.fract().is_zero()
}

/// Normalize a TON amount triplet with the default heuristics.
///
/// Callers must only invoke this when the deal currency is TON; other
/// currencies are passed through untouched by the deal converter.
pub fn normalize_ton_amounts(amounts: FinanceAmounts) -> FinanceAmounts {
    normalize_ton_amounts_with(amounts, &NanoHeuristics::default())
}

/// Normalize a TON amount triplet, trying each reconciliation in order and
/// taking the first that fits:
///
/// 1. `fee + publisher ≈ price`: already consistent. An all-integer triplet
///    with a price above the integer floor is an all-nano triplet; divide
///    everything. Otherwise unchanged.
/// 2. `(fee + publisher) / 1e9 ≈ price`: fee and publisher are nano.
/// 3. `fee + publisher ≈ price / 1e9`: only the price is nano.
/// 4. `(fee + publisher) / 1e9 ≈ price / 1e9`: all nano.
/// 5. Fallback: convert each field independently when it is an integer at
///    least as large as `max(integer_floor, price * price_multiplier)`.
pub fn normalize_ton_amounts_with(
    amounts: FinanceAmounts,
    heuristics: &NanoHeuristics,
) -> FinanceAmounts {
    let FinanceAmounts {
        agreed_price: price,
        platform_fee_amount: fee,
        publisher_amount: publisher,
    } = amounts;
    let tol = heuristics.rel_tolerance;
    let parts = fee + publisher;

    if approx_eq(parts, price, tol) {
        let all_integers = is_integer(price) && is_integer(fee) && is_integer(publisher);
        if all_integers && price >= heuristics.integer_floor {
            tracing::debug!(%price, "treating consistent integer triplet as all-nano");
            return FinanceAmounts {
                agreed_price: price / NANO,
                platform_fee_amount: fee / NANO,
                publisher_amount: publisher / NANO,
            };
        }
        return amounts;
    }

    if approx_eq(parts / NANO, price, tol) {
        return FinanceAmounts {
            agreed_price: price,
            platform_fee_amount: fee / NANO,
            publisher_amount: publisher / NANO,
        };
    }

    if approx_eq(parts, price / NANO, tol) {
        return FinanceAmounts {
            agreed_price: price / NANO,
            platform_fee_amount: fee,
            publisher_amount: publisher,
        };
    }

    if approx_eq(parts / NANO, price / NANO, tol) {
        return FinanceAmounts {
            agreed_price: price / NANO,
            platform_fee_amount: fee / NANO,
            publisher_amount: publisher / NANO,
        };
    }

    tracing::debug!(%price, %fee, %publisher, "inconsistent TON triplet, falling back to per-field heuristic");
    FinanceAmounts {
        agreed_price: maybe_convert_from_nano(price, price, heuristics),
        platform_fee_amount: maybe_convert_from_nano(fee, price, heuristics),
        publisher_amount: maybe_convert_from_nano(publisher, price, heuristics),
    }
}

/// Per-field fallback: convert to whole units only when the value is an
/// integer at least as large as `max(integer_floor, agreed_price * price_multiplier)`.
fn maybe_convert_from_nano(
    value: Decimal,
    agreed_price: Decimal,
    heuristics: &NanoHeuristics,
) -> Decimal {
    let threshold = heuristics
        .integer_floor
        .max(agreed_price * heuristics.price_multiplier);
    if is_integer(value) && value >= threshold {
        value / NANO
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn amounts(price: &str, fee: &str, publisher: &str) -> FinanceAmounts {
        FinanceAmounts {
            agreed_price: Decimal::from_str(price).unwrap(),
            platform_fee_amount: Decimal::from_str(fee).unwrap(),
            publisher_amount: Decimal::from_str(publisher).unwrap(),
        }
    }

    #[test]
    fn test_nano_triplet_detected() {
        let out = normalize_ton_amounts(amounts("1000000000", "50000000", "950000000"));
        assert_eq!(out, amounts("1", "0.05", "0.95"));
    }

    #[test]
    fn test_consistent_whole_units_pass_through() {
        let input = amounts("1", "0.05", "0.95");
        assert_eq!(normalize_ton_amounts(input), input);
    }

    #[test]
    fn test_small_consistent_integers_pass_through() {
        // Consistent and integer, but below the nano floor: a legitimate
        // 100 TON deal must not be divided.
        let input = amounts("100", "5", "95");
        assert_eq!(normalize_ton_amounts(input), input);
    }

    #[test]
    fn test_fee_and_publisher_nano_price_whole() {
        let out = normalize_ton_amounts(amounts("2", "100000000", "1900000000"));
        assert_eq!(out, amounts("2", "0.1", "1.9"));
    }

    #[test]
    fn test_price_nano_parts_whole() {
        let out = normalize_ton_amounts(amounts("2000000000", "0.1", "1.9"));
        assert_eq!(out, amounts("2", "0.1", "1.9"));
    }

    #[test]
    fn test_fallback_per_field() {
        // Triplet is inconsistent under every combined interpretation; the
        // huge integer fields convert individually, the small one stays.
        let out = normalize_ton_amounts(amounts("3", "7000000000", "0.5"));
        assert_eq!(out.platform_fee_amount, Decimal::from(7));
        assert_eq!(out.publisher_amount, Decimal::from_str("0.5").unwrap());
        assert_eq!(out.agreed_price, Decimal::from(3));
    }

    #[test]
    fn test_fallback_respects_custom_thresholds() {
        let heuristics = NanoHeuristics {
            integer_floor: Decimal::from(10),
            price_multiplier: Decimal::ONE,
            ..NanoHeuristics::default()
        };
        // fee=12 is an integer >= max(10, 3*1), so the loosened heuristics
        // convert it; the defaults would not.
        let input = amounts("3", "12", "0.5");
        let loose = normalize_ton_amounts_with(input, &heuristics);
        assert_eq!(loose.platform_fee_amount, Decimal::from(12) / NANO);
        let strict = normalize_ton_amounts(input);
        assert_eq!(strict.platform_fee_amount, Decimal::from(12));
    }

    #[test]
    fn test_zero_amounts() {
        let input = amounts("0", "0", "0");
        assert_eq!(normalize_ton_amounts(input), input);
    }

    #[test]
    fn test_approx_eq_relative_tolerance() {
        let tol = NanoHeuristics::default().rel_tolerance;
        assert!(approx_eq(
            Decimal::from_str("1.0000001").unwrap(),
            Decimal::ONE,
            tol
        ));
        assert!(!approx_eq(
            Decimal::from_str("1.001").unwrap(),
            Decimal::ONE,
            tol
        ));
    }
}
