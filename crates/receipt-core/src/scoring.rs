//! # Scoring Engine
//!
//! Computes the reward points for a receipt from seven fixed rules.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule  Condition                                    Points              │
//! │  ────  ─────────────────────────────────────────    ─────────────────── │
//! │  R1    ASCII letters/digits in retailer             1 each              │
//! │  R2    total has no cents                           50                  │
//! │  R3    total is a multiple of 0.25                  25                  │
//! │  R4    every two items                              5 per pair          │
//! │  R5    trimmed description length % 3 == 0          ceil(price * 0.2)   │
//! │  R6    day of purchase date is odd                  6                   │
//! │  R7    purchase hour is exactly 14                  10                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every rule is evaluated; the score is the sum. Scoring never fails: a date
//! or time that does not parse earns zero from R6/R7.
//!
//! R7 only matches hour 14 (14:00-14:59). The informal wording "between 2pm
//! and 4pm" is broader; the narrow window is kept for compatibility with
//! points already issued.
//!
//! ## Example
//! ```rust
//! use receipt_core::{scoring, Item, Money, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     items: vec![Item::new("Emils Cheese Pizza", Money::from_cents(1220))],
//!     total: Money::from_cents(1220),
//! };
//!
//! // 6 (Target) + 3 (18-char description) + 6 (odd day)
//! assert_eq!(scoring::score(&receipt), 15);
//! ```

use chrono::{Datelike, Timelike};
use serde::Serialize;

use crate::money::Money;
use crate::types::{Item, Receipt};
use crate::validation::{parse_purchase_date, parse_purchase_time};

// =============================================================================
// Rule Constants
// =============================================================================

/// R2: total is a whole amount.
pub const ROUND_TOTAL_POINTS: u64 = 50;

/// R3: total is a multiple of [`QUARTER`].
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;

/// R3 step.
pub const QUARTER: Money = Money::from_cents(25);

/// R4: points per complete pair of items.
pub const ITEM_PAIR_POINTS: u64 = 5;

/// R5: trimmed description length must be a multiple of this.
pub const DESCRIPTION_LENGTH_MULTIPLE: usize = 3;

/// R5: price multiplier before rounding up.
pub const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;

/// R6: purchase day is odd.
pub const ODD_DAY_POINTS: u64 = 6;

/// R7: purchase hour matches [`BONUS_HOUR`].
pub const BONUS_HOUR_POINTS: u64 = 10;

/// R7 hour (24-hour clock).
pub const BONUS_HOUR: u32 = 14;

// =============================================================================
// Score Breakdown
// =============================================================================

/// Per-rule contributions for one receipt.
///
/// Callers that want a diagnostic trace log this; [`score`] only needs the
/// total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub retailer_name: u64,
    pub round_total: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub description_length: u64,
    pub odd_day: u64,
    pub bonus_hour: u64,
}

impl ScoreBreakdown {
    /// Sum of all rule contributions, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        [
            self.retailer_name,
            self.round_total,
            self.quarter_multiple,
            self.item_pairs,
            self.description_length,
            self.odd_day,
            self.bonus_hour,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Scores a receipt. Deterministic and side-effect free.
pub fn score(receipt: &Receipt) -> u64 {
    breakdown(receipt).total()
}

/// Evaluates every rule and reports each contribution separately.
pub fn breakdown(receipt: &Receipt) -> ScoreBreakdown {
    ScoreBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        round_total: round_total_points(receipt.total),
        quarter_multiple: quarter_multiple_points(receipt.total),
        item_pairs: item_pair_points(&receipt.items),
        description_length: description_length_points(&receipt.items),
        odd_day: odd_day_points(&receipt.purchase_date),
        bonus_hour: bonus_hour_points(&receipt.purchase_time),
    }
}

// =============================================================================
// Rules
// =============================================================================

/// R1: one point per ASCII letter or digit. `&`, spaces and non-ASCII
/// letters earn nothing.
pub fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// R2: 50 points when the total has no cents.
pub fn round_total_points(total: Money) -> u64 {
    if total.is_whole() {
        ROUND_TOTAL_POINTS
    } else {
        0
    }
}

/// R3: 25 points when the total is a multiple of 0.25.
pub fn quarter_multiple_points(total: Money) -> u64 {
    if total.is_multiple_of(QUARTER) {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

/// R4: 5 points for every complete pair of items.
pub fn item_pair_points(items: &[Item]) -> u64 {
    ((items.len() / 2) as u64).saturating_mul(ITEM_PAIR_POINTS)
}

/// R5: for each item whose trimmed description length is a multiple of 3
/// (including empty), `ceil(price * 0.2)` points.
///
/// Length is counted in bytes of the trimmed UTF-8 text. The sum saturates
/// at `u64::MAX`.
pub fn description_length_points(items: &[Item]) -> u64 {
    items
        .iter()
        .filter(|item| item.trimmed_description().len() % DESCRIPTION_LENGTH_MULTIPLE == 0)
        .map(|item| price_share_points(item.price))
        .fold(0, u64::saturating_add)
}

/// `ceil(price * 0.2)` in `f64`, clamped at zero.
fn price_share_points(price: Money) -> u64 {
    let share = (price.as_f64() * DESCRIPTION_PRICE_MULTIPLIER).ceil();
    if share > 0.0 {
        share as u64
    } else {
        0
    }
}

/// R6: 6 points when the purchase day is odd. Unparsable dates earn 0.
pub fn odd_day_points(purchase_date: &str) -> u64 {
    match parse_purchase_date(purchase_date) {
        Ok(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

/// R7: 10 points when the purchase hour is exactly 14. Unparsable times
/// earn 0.
pub fn bonus_hour_points(purchase_time: &str) -> u64 {
    match parse_purchase_time(purchase_time) {
        Ok(time) if time.hour() == BONUS_HOUR => BONUS_HOUR_POINTS,
        _ => 0,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    fn item(description: &str, price: &str) -> Item {
        Item::new(description, money(price))
    }

    fn receipt(retailer: &str, date: &str, time: &str, items: Vec<Item>, total: &str) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: date.to_string(),
            purchase_time: time.to_string(),
            items,
            total: money(total),
        }
    }

    fn target_receipt() -> Receipt {
        receipt(
            "Target",
            "2022-01-01",
            "13:01",
            vec![
                item("Mountain Dew 12PK", "6.49"),
                item("Emils Cheese Pizza", "12.25"),
                item("Knorr Creamy Chicken", "1.26"),
                item("Doritos Nacho Cheese", "3.35"),
                item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            "35.35",
        )
    }

    fn corner_market_receipt() -> Receipt {
        receipt(
            "M&M Corner Market",
            "2022-03-20",
            "14:33",
            vec![
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
            ],
            "9.00",
        )
    }

    #[test]
    fn test_retailer_name_points() {
        assert_eq!(retailer_name_points("Target"), 6);
        assert_eq!(retailer_name_points("M&M Corner Market"), 14);
        assert_eq!(retailer_name_points(""), 0);
        assert_eq!(retailer_name_points("Café 7-Eleven"), 10);
        assert_eq!(retailer_name_points("  &&  -- "), 0);
    }

    #[test]
    fn test_round_and_quarter_totals() {
        assert_eq!(round_total_points(money("35.00")) + quarter_multiple_points(money("35.00")), 75);
        assert_eq!(round_total_points(money("9.00")) + quarter_multiple_points(money("9.00")), 75);
        assert_eq!(round_total_points(money("10.01")) + quarter_multiple_points(money("10.01")), 0);

        assert_eq!(round_total_points(money("35.35")), 0);
        assert_eq!(quarter_multiple_points(money("35.35")), 0);

        assert_eq!(round_total_points(money("0.75")), 0);
        assert_eq!(quarter_multiple_points(money("0.75")), 25);

        // Zero is both whole and a quarter multiple
        assert_eq!(round_total_points(Money::zero()), 50);
        assert_eq!(quarter_multiple_points(Money::zero()), 25);
    }

    #[test]
    fn test_item_pair_points() {
        let four: Vec<Item> = (0..4).map(|_| item("x", "1.00")).collect();
        let five: Vec<Item> = (0..5).map(|_| item("x", "1.00")).collect();

        assert_eq!(item_pair_points(&four), 10);
        assert_eq!(item_pair_points(&five), 10);
        assert_eq!(item_pair_points(&four[..1]), 0);
        assert_eq!(item_pair_points(&[]), 0);
    }

    #[test]
    fn test_description_length_points() {
        // 18 chars: ceil(12.25 * 0.2) = ceil(2.45) = 3
        assert_eq!(description_length_points(&[item("Emils Cheese Pizza", "12.25")]), 3);

        // Trimmed to 24 chars: ceil(12.00 * 0.2) = ceil(2.4) = 3
        assert_eq!(
            description_length_points(&[item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00")]),
            3
        );

        // 17 chars: not a multiple of 3
        assert_eq!(description_length_points(&[item("Mountain Dew 12PK", "6.49")]), 0);

        // Empty after trimming counts (0 % 3 == 0)
        assert_eq!(description_length_points(&[item("   ", "4.00")]), 1);

        // Exact products still round up only when needed
        assert_eq!(description_length_points(&[item("abc", "5.00")]), 1);
        assert_eq!(description_length_points(&[item("abc", "0.00")]), 0);
        assert_eq!(description_length_points(&[item("abc", "0.01")]), 1);
    }

    #[test]
    fn test_description_length_sums_across_items() {
        let items = vec![
            item("abc", "10.00"),  // 2
            item("abcd", "10.00"), // 0
            item("abcdef", "2.25"), // ceil(0.45) = 1
        ];
        assert_eq!(description_length_points(&items), 3);
    }

    #[test]
    fn test_odd_day_points() {
        assert_eq!(odd_day_points("2022-01-01"), 6);
        assert_eq!(odd_day_points("2022-03-20"), 0);
        assert_eq!(odd_day_points("2022-12-31"), 6);
    }

    #[test]
    fn test_huge_receipt_saturates_instead_of_overflowing() {
        let items = vec![Item::new("abc", Money::from_cents(i64::MAX)); 1001];

        assert_eq!(description_length_points(&items), u64::MAX);

        let r = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "14:01".to_string(),
            items,
            total: Money::from_cents(i64::MAX),
        };
        assert_eq!(score(&r), u64::MAX);
        assert_eq!(breakdown(&r).total(), u64::MAX);
    }

    #[test]
    fn test_single_digit_date_and_time_fields_earn_nothing() {
        assert_eq!(odd_day_points("2022-1-3"), 0);
        assert_eq!(odd_day_points("2022-01-3"), 0);
        assert_eq!(odd_day_points("2022-01-03"), 6);
        assert_eq!(bonus_hour_points("14:5"), 0);
        assert_eq!(bonus_hour_points(" 14:33"), 0);
        assert_eq!(bonus_hour_points("14:05"), 10);
    }

    #[test]
    fn test_bonus_hour_points() {
        assert_eq!(bonus_hour_points("14:33"), 10);
        assert_eq!(bonus_hour_points("14:00"), 10);
        assert_eq!(bonus_hour_points("14:59"), 10);
        assert_eq!(bonus_hour_points("13:59"), 0);
        assert_eq!(bonus_hour_points("15:00"), 0);
        assert_eq!(bonus_hour_points("16:01"), 0);
    }

    #[test]
    fn test_malformed_date_and_time_score_zero() {
        assert_eq!(odd_day_points("not-a-date"), 0);
        assert_eq!(odd_day_points(""), 0);
        assert_eq!(bonus_hour_points("2pm"), 0);
        assert_eq!(bonus_hour_points(""), 0);

        let mut r = corner_market_receipt();
        r.purchase_date = "20/03/2022".to_string();
        r.purchase_time = "quarter past two".to_string();
        let b = breakdown(&r);
        assert_eq!(b.odd_day, 0);
        assert_eq!(b.bonus_hour, 0);
        assert_eq!(b.total(), 14 + 50 + 25 + 10);
    }

    #[test]
    fn test_target_receipt_scores_28() {
        let b = breakdown(&target_receipt());

        assert_eq!(
            b,
            ScoreBreakdown {
                retailer_name: 6,
                round_total: 0,
                quarter_multiple: 0,
                item_pairs: 10,
                description_length: 6,
                odd_day: 6,
                bonus_hour: 0,
            }
        );
        assert_eq!(score(&target_receipt()), 28);
    }

    #[test]
    fn test_corner_market_receipt_scores_109() {
        let b = breakdown(&corner_market_receipt());

        assert_eq!(b.retailer_name, 14);
        assert_eq!(b.round_total, 50);
        assert_eq!(b.quarter_multiple, 25);
        assert_eq!(b.item_pairs, 10);
        assert_eq!(b.description_length, 0);
        assert_eq!(b.odd_day, 0);
        assert_eq!(b.bonus_hour, 10);
        assert_eq!(score(&corner_market_receipt()), 109);
    }

    #[test]
    fn test_total_is_trusted_not_recomputed() {
        let mut r = target_receipt();
        r.total = money("100.00");
        assert_ne!(r.items_sum(), r.total);
        assert_eq!(breakdown(&r).round_total, 50);
        assert_eq!(breakdown(&r).quarter_multiple, 25);
    }

    #[test]
    fn test_score_is_deterministic() {
        let r = target_receipt();
        let first = score(&r);
        for _ in 0..10 {
            assert_eq!(score(&r), first);
        }
    }
}
